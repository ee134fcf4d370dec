//! Text-mode dungeon crawler.
//!
//! A turn-print loop over stdin: the current room is printed, the player
//! types a command, the session resolves it, and the consequences are
//! printed. All game logic lives in `dungeon-core`; this binary only parses
//! commands and renders results.

use std::io::{self, BufRead, Write};

use dungeon_core::{
    CombatAction, Direction, EncounterState, GameSession, MoveOutcome, SessionConfig, SessionError,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let mut config = SessionConfig::new(
        flag_value(&args, "--name").unwrap_or_else(|| "Adventurer".to_string()),
    );
    if let Some(seed) = flag_value(&args, "--seed").and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(config);
    println!("Welcome, {}!", session.player().name);
    println!("Descend through {} floors. Type 'help' for commands.", session.dungeon().total_floors());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        match session.current_room() {
            Ok(view) => println!("{view}"),
            Err(_) => break,
        }

        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else { break };
        let input = line.trim().to_lowercase();
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");

        let result = match command {
            "forward" | "f" => handle_move(&mut session, Direction::Forward),
            "back" | "b" => handle_move(&mut session, Direction::Backward),
            "inspect" | "i" => handle_inspect(&mut session),
            "attack" | "a" => handle_combat(&mut session, CombatAction::Attack),
            "cast" | "c" => handle_combat(&mut session, CombatAction::CastSpell),
            "flee" | "r" => handle_combat(&mut session, CombatAction::Flee),
            "drink" | "d" => handle_drink(&mut session, parts.next()),
            "status" | "s" => {
                print_status(&session);
                Ok(())
            }
            "help" | "h" => {
                print_help();
                Ok(())
            }
            "quit" | "q" => break,
            "" => Ok(()),
            other => {
                println!("Unknown command: {other}. Type 'help' for commands.");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("{err}");
        }
        println!();
    }

    if session.is_complete() {
        println!("You have cleared every floor of the dungeon. Victory!");
    } else if session.is_over() {
        println!("{} has fallen. The dungeon claims another.", session.player().name);
    } else {
        println!("Farewell.");
    }
}

fn handle_move(session: &mut GameSession, direction: Direction) -> Result<(), SessionError> {
    match session.move_player(direction)? {
        MoveOutcome::Moved => {}
        MoveOutcome::Blocked => println!("A monster blocks your way. Fight or flee!"),
        MoveOutcome::CannotRetreat => println!("You cannot go back."),
        MoveOutcome::NewFloor => {
            println!("You descend to floor {}.", session.position().floor + 1)
        }
        MoveOutcome::DungeonComplete => {}
    }
    Ok(())
}

fn handle_inspect(session: &mut GameSession) -> Result<(), SessionError> {
    match session.inspect_current_room()? {
        Some(item) => println!("You found: {item}"),
        None => println!("Nothing of interest here."),
    }
    Ok(())
}

fn handle_combat(session: &mut GameSession, action: CombatAction) -> Result<(), SessionError> {
    let outcome = session.combat_action(action)?;
    for effect in &outcome.effects {
        println!("{effect}");
    }
    if outcome.state == EncounterState::Victory {
        print_status(session);
    }
    Ok(())
}

fn handle_drink(session: &mut GameSession, slot: Option<&str>) -> Result<(), SessionError> {
    let index = slot.and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    // Slots are shown 1-based
    let healed = session.use_potion(index.saturating_sub(1))?;
    println!("You feel better: +{healed} health.");
    Ok(())
}

fn print_status(session: &GameSession) {
    let player = session.player();
    println!(
        "{}: {} HP, {} MP, level {}, {} XP",
        player.name, player.health.current, player.mana, player.level, player.experience
    );
    if player.inventory.is_empty() {
        println!("Inventory: empty");
    } else {
        println!("Inventory:");
        for (i, item) in player.inventory.iter().enumerate() {
            println!("  {}. {item}", i + 1);
        }
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn print_help() {
    println!("Dungeon crawler commands:");
    println!("  forward (f)   move to the next room");
    println!("  back (b)      move to the previous room");
    println!("  inspect (i)   search the room for items");
    println!("  attack (a)    strike the monster for 10 damage");
    println!("  cast (c)      spell: 20 damage for 10 mana");
    println!("  flee (r)      run from the fight");
    println!("  drink N (d)   drink the potion in inventory slot N");
    println!("  status (s)    show player status");
    println!("  quit (q)      give up");
    println!();
    println!("Flags: --name NAME, --seed SEED");
}
