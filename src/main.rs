mod cli;

use std::io::{self, BufRead, Write};

use hydra_kingdom::Game;
use hydra_kingdom::battle::BattleOutcome;
use hydra_kingdom::controller::{Controller, Decline};
use hydra_kingdom::economy::{BuildingKind, Resource};
use hydra_kingdom::heroes::HeroClass;
use hydra_kingdom::quests::QuestKey;
use hydra_kingdom::rng::RandomSource;
use log::{error, info, warn};

use crate::cli::{CliArgs, Command};

/// Numbered prompts on stdout, answers read line by line from `input`.
struct TerminalController<B: BufRead> {
    input: B,
}

impl<B: BufRead> TerminalController<B> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

impl<B: BufRead> Controller for TerminalController<B> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        println!("\n{}", prompt);
        for (i, option) in options.iter().enumerate() {
            println!("({}) {}", i + 1, option);
        }
        println!("(q) Cancel");
        print!("Enter choice: ");
        io::stdout().flush().ok();

        let answer = self.read_line()?;
        answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < options.len())
    }
}

fn main() {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli::log_filter(&args)),
    )
    .init();

    let config = match cli::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let game = match args.command {
        Command::ShowConfig => {
            print!("{}", config);
            return;
        }
        Command::Simulate => {
            let mut game = Game::from_config(config);
            simulate(&mut game, args.days.unwrap_or(30), &args);
            game
        }
        Command::Play => {
            let mut game = Game::from_config(config);
            let stdin = io::stdin();
            let mut controller = TerminalController {
                input: stdin.lock(),
            };
            play(&mut game, &mut controller);
            game
        }
    };

    if let Some(path) = &args.output_file {
        let path = path.to_string_lossy();
        match game.chronicle().save_to_file(&path) {
            Ok(()) => info!("chronicle written to {}", path),
            Err(e) => error!("failed to write chronicle to {}: {}", path, e),
        }
    }
}

fn print_messages(messages: &[String]) {
    for msg in messages {
        println!(" - {}", msg);
    }
}

fn print_status<R: RandomSource>(game: &Game<R>) {
    let s = game.state();
    println!("\n{}", "=".repeat(60));
    println!(
        "Day {} | Quests Used: {}/{}",
        s.day, s.quests_today, s.quests_per_day
    );
    println!(
        "Gold: {}  Food: {}  Arcane: {}",
        s.resources.get(Resource::Gold),
        s.resources.get(Resource::Food),
        s.resources.get(Resource::Arcane)
    );
    let built: Vec<String> = s
        .buildings
        .iter()
        .filter(|(kind, level)| *kind == BuildingKind::TownCenter || *level > 0)
        .map(|(kind, level)| format!("{} Lv {}", kind, level))
        .collect();
    println!("Buildings: {}", built.join(", "));
    for hero in s.heroes.recruited() {
        println!(
            "  {}: Lv {}, XP {} (Pow {})",
            hero.class,
            hero.level,
            hero.xp,
            hero.combat_power()
        );
    }
    println!(
        "Hydra: located {} | access {} | gear {} | fight {}",
        s.hydra.located(),
        s.hydra.access(),
        s.hydra.gear(),
        s.hydra.fight_unlocked()
    );
    if let Some(deity) = s.deity {
        let blessing = if s.blessing().is_some() {
            "Temple built => Blessings active!"
        } else {
            "Temple NOT built => No blessing yet"
        };
        println!("Patron: {} ({})", s.deity_name(deity), blessing);
    }
    println!("{}", "=".repeat(60));
}

fn play<R: RandomSource, B: BufRead>(game: &mut Game<R>, controller: &mut TerminalController<B>) {
    println!("Welcome to SLAY THE HYDRA");
    println!("Manage your kingdom, recruit heroes, and complete quests to eventually slay the Hydra.");

    loop {
        print_status(game);
        let mut menu = vec![
            "Build or Upgrade a structure".to_string(),
            "Recruit or Train a hero".to_string(),
            "Send heroes on a quest".to_string(),
            "End Day".to_string(),
            "View Stats".to_string(),
        ];
        if let Some(last) = game.state().last_quest {
            menu.push(format!("Repeat last quest ({} with {})", last.quest, last.hero));
        }
        if game.state().hydra.fight_unlocked() {
            menu.push("Attempt the final Hydra battle".to_string());
        }
        if game.can_choose_deity() {
            menu.push("Choose a God/Goddess".to_string());
        }

        let Some(choice) = controller.choose("Choose an action:", &menu) else {
            println!("\nThanks for playing!");
            return;
        };
        let label = menu[choice].clone();
        let outcome: Result<Vec<String>, String> = match label.as_str() {
            "Build or Upgrade a structure" => build(game, controller),
            "Recruit or Train a hero" => recruit(game, controller),
            "Send heroes on a quest" => quest(game, controller),
            "End Day" => {
                let report = game.advance_day(controller);
                let mut messages = report.messages;
                if report.deity_offered {
                    messages.extend(pick_deity(game, controller));
                }
                Ok(messages)
            }
            "View Stats" => serde_json::to_string_pretty(&game.state().stats)
                .map(|s| vec![s])
                .map_err(|e| e.to_string()),
            "Attempt the final Hydra battle" => game
                .attempt_final_battle()
                .map(|r| r.messages)
                .map_err(|e| e.to_string()),
            "Choose a God/Goddess" => Ok(pick_deity(game, controller)),
            _ => game
                .repeat_last_quest(controller)
                .map(|r| r.messages)
                .map_err(|e| e.to_string()),
        };

        match outcome {
            Ok(messages) => print_messages(&messages),
            Err(reason) => println!(" - {}", reason),
        }
        if game.state().stats.hydras_slain > 0 {
            println!("\nThe kingdom is saved. Thanks for playing!");
            return;
        }
    }
}

fn build<R: RandomSource>(
    game: &mut Game<R>,
    controller: &mut dyn Controller,
) -> Result<Vec<String>, String> {
    let state = game.state();
    let options: Vec<String> = BuildingKind::ALL
        .iter()
        .map(|kind| match state.buildings.next_upgrade_cost(*kind) {
            Some(cost) => format!("{} (Lv {}) - Cost: {}", kind, state.level(*kind), cost),
            None => format!("{} (Max Level Reached)", kind),
        })
        .collect();
    let index = controller
        .choose("Which building to construct or upgrade?", &options)
        .ok_or("Cancelled building/upgrade.")?;
    game.upgrade_building(BuildingKind::ALL[index])
        .map(|r| r.messages)
        .map_err(|e| e.to_string())
}

fn recruit<R: RandomSource>(
    game: &mut Game<R>,
    controller: &mut dyn Controller,
) -> Result<Vec<String>, String> {
    let options: Vec<String> = HeroClass::ALL
        .iter()
        .map(|class| {
            let hero = game.state().heroes.get(*class);
            match (hero.level, hero.xp_to_next_level()) {
                (0, _) => format!("Recruit {} (50G, 10F)", class),
                (level, Some(needed)) => format!(
                    "Train {} to Lv {} (Needs {} more XP)",
                    class,
                    level + 1,
                    needed.saturating_sub(hero.xp)
                ),
                (_, None) => format!("{} is at MAX Level", class),
            }
        })
        .collect();
    let index = controller
        .choose("Which hero to recruit or train?", &options)
        .ok_or("Cancelled hero recruitment/training.")?;
    game.recruit_or_train_hero(HeroClass::ALL[index], controller)
        .map(|r| r.messages)
        .map_err(|e| e.to_string())
}

fn quest<R: RandomSource>(
    game: &mut Game<R>,
    controller: &mut dyn Controller,
) -> Result<Vec<String>, String> {
    let available: Vec<QuestKey> = game.list_available_quests();
    if available.is_empty() {
        return Err("No quests are currently available.".to_string());
    }
    let options: Vec<String> = available.iter().map(|q| q.title().to_string()).collect();
    let index = controller
        .choose("Available Quests:", &options)
        .ok_or("Cancelled sending on a quest.")?;
    game.send_on_quest(available[index], None, controller)
        .map(|r| r.messages)
        .map_err(|e| e.to_string())
}

fn pick_deity<R: RandomSource>(game: &mut Game<R>, controller: &mut dyn Controller) -> Vec<String> {
    let options = game.deity_options();
    match controller.choose("Choose your patron deity:", &options) {
        Some(index) => game
            .choose_deity(index)
            .unwrap_or_else(|e| vec![e.to_string()]),
        None => vec!["You declined to choose a deity at this time.".to_string()],
    }
}

/// Sends the strongest hero gathering until the day's allowance is spent,
/// fights whenever the battle is unlocked, and declines every prompt.
fn simulate<R: RandomSource>(game: &mut Game<R>, days: u32, args: &CliArgs) {
    let mut controller = Decline;
    for _ in 0..days {
        let hero = game
            .state()
            .heroes
            .recruited()
            .max_by_key(|h| h.combat_power())
            .map(|h| h.class);
        while game.state().quests_remaining() > 0 {
            match game.send_on_quest(QuestKey::GatherResources, hero, &mut controller) {
                Ok(resolution) if !args.quiet => print_messages(&resolution.messages),
                Ok(_) => {}
                Err(e) => {
                    warn!("quest refused: {}", e);
                    break;
                }
            }
        }

        if game.state().hydra.fight_unlocked() {
            if let Ok(report) = game.attempt_final_battle() {
                if !args.quiet {
                    print_messages(&report.messages);
                }
                if report.outcome == BattleOutcome::Victory {
                    break;
                }
            }
        }

        let report = game.advance_day(&mut controller);
        if !args.quiet {
            print_messages(&report.messages);
        }
    }

    if !args.quiet {
        print_status(game);
    }
    match serde_json::to_string_pretty(&game.state().stats) {
        Ok(stats) => println!("{}", stats),
        Err(e) => error!("failed to render stats: {}", e),
    }
}
