use mnemo::{CommandLoop, Menu, OutputMode};

fn main() -> mnemo::Result<()> {
    let mut menu = Menu::new("action", "Build/Test/Deploy");
    menu.set_header("release console\n===============");

    let mut log = Vec::new();
    let mut post = |selection: &str| log.push(selection.to_string());
    CommandLoop::new(menu)
        .with_mode(OutputMode::Captured)
        .run(
            |selection| format!("running {}...\ndone", selection),
            Some(&mut post),
            None,
        )?;

    println!("ran {} command(s)", log.len());
    Ok(())
}
