use std::io;

use tindahan_shell::{Console, Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    tindahan_observability::init();

    let session = Session::new(ShellConfig::default())?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    tindahan_shell::run(session, &mut console)
}
