use std::io::{stdin, stdout, BufRead, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use basketball_tracker::command::{Command, HELP};
use basketball_tracker::config::Config;
use basketball_tracker::posts::box_score::BoxScore;
use basketball_tracker::posts::event_log::EventLogPost;
use basketball_tracker::posts::substitution::Substitution;
use basketball_tracker::posts::Post;
use basketball_tracker::util::clock::SystemClock;
use basketball_tracker::util::stat::StatKind;
use basketball_tracker::Engine;

const RECENT_LOG_ENTRIES: usize = 5;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = main0() {
        eprintln!("Error while keeping score: {e:#}");
        std::process::exit(1);
    }
}

fn main0() -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let mut engine = Engine::with_players(SystemClock, config.timestamp_format(), config.starting_players);
    info!("Session started with {} players ({})", config.starting_players, config.timezone);

    println!("Stat kinds: {}", StatKind::BUTTONS.map(|kind| format!("{kind} ({})", kind.code())).join(", "));
    println!("Type 'help' for commands.\n");
    Post::BoxScore(BoxScore::new(&engine.snapshot(), None)).send()?;

    let mut lines = stdin().lock().lines();
    loop {
        print!("> ");
        stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Could not read from stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                if !line.trim().is_empty() {
                    eprintln!("{e}");
                }
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(e) = run(&mut engine, &config, command) {
            eprintln!("{e:#}");
        }
    }

    Post::Summary(BoxScore::new(&engine.snapshot(), Some(engine.live_minutes().as_slice())), EventLogPost::new(engine.log())).send()?;
    Ok(())
}

fn run(engine: &mut Engine<SystemClock>, config: &Config, command: Command) -> Result<()> {
    let log_len = engine.log().len();
    let snapshot = match command {
        Command::Add => engine.add_player(),
        Command::Remove(index) => engine.remove_player(index),
        Command::Rename(index, name) => engine.rename_player(index, name),
        Command::Stat(index, label) => engine.record_stat(index, &label),
        Command::SubIn(index) => engine.sub_in(index),
        Command::SubOut(index) => engine.sub_out(index),
        Command::BoxScore => return Post::BoxScore(BoxScore::new(&engine.snapshot(), Some(engine.live_minutes().as_slice()))).send(),
        Command::Log => return Post::EventLog(EventLogPost::new(engine.log())).send(),
        Command::Json => {
            println!("{}", engine.snapshot().to_json().context("Could not serialize roster")?);
            return Ok(());
        }
        Command::Copy => {
            let post = Post::Summary(BoxScore::new(&engine.snapshot(), Some(engine.live_minutes().as_slice())), EventLogPost::new(engine.log()));
            post.send_with_settings(false, config.copy_to_clipboard)?;
            if config.copy_to_clipboard {
                println!("Copied to clipboard.");
            } else {
                println!("Clipboard disabled (TRACKER_CLIPBOARD).");
            }
            return Ok(());
        }
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };

    Post::BoxScore(BoxScore::new(&snapshot, Some(engine.live_minutes().as_slice()))).send()?;
    if engine.log().len() > log_len {
        if let Some(entry) = engine.log().latest() {
            let card = snapshot
                .iter()
                .find(|player| player.id == entry.player_id)
                .and_then(|player| Substitution::from_entry(entry, player));
            match card {
                Some(card) => Post::Substitution(card).send()?,
                None => Post::EventLog(EventLogPost::recent(engine.log(), RECENT_LOG_ENTRIES)).send()?,
            }
        }
    }
    Ok(())
}
