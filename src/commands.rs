use crate::cli::Commands;
use crate::error::Result;
use crate::gh::Gh;
use crate::interactive::prompt;
use crate::manager::EmojiManager;
use crate::status::{get_status, set_status, SetOptions};

pub fn handle_command(command: Commands) -> Result<()> {
    let em = EmojiManager::new()?;
    let gh = Gh::from_env();

    match command {
        Commands::Set {
            message,
            emoji,
            limited,
            expiry,
            org,
        } => {
            let mut opts = SetOptions {
                message: message.unwrap_or_default(),
                emoji,
                limited,
                expiry,
                org,
            };
            handle_set(&gh, &em, &mut opts)
        }
        Commands::Get { login } => handle_get(&gh, &em, login.as_deref()),
    }
}

fn handle_set(gh: &Gh, em: &EmojiManager, opts: &mut SetOptions) -> Result<()> {
    if opts.message.is_empty() {
        prompt(em, opts)?;
    }

    println!("{}", set_status(gh, em, opts)?);
    Ok(())
}

fn handle_get(gh: &Gh, em: &EmojiManager, login: Option<&str>) -> Result<()> {
    let status = get_status(gh, login)?;
    println!("{}", status.render(em));
    Ok(())
}
