use mnemo::Menu;

fn main() -> mnemo::Result<()> {
    let mut menu = Menu::new("fruit", "Apple/Pear/Orange");
    let selection = menu.prompt()?;
    println!("you picked {}!", selection);
    Ok(())
}
