use anyhow::{Context, Result};
use biblio_circulation::CirculationManager;
use biblio_config::ConfigManager;
use biblio_store::Store;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

mod commands;
mod input;
mod menu;
mod seed;

fn build_cli() -> Command {
    Command::new("biblio")
        .version("0.1.0")
        .about("Library record keeper: books, members, loans and fines over flat JSON files")
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory for collection files (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to the config file")
                .global(true),
        )
        .subcommand(
            Command::new("authors")
                .about("Manage authors")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Register a new author")
                        .arg(Arg::new("first-name").long("first-name").value_name("NAME").required(true))
                        .arg(Arg::new("last-name").long("last-name").value_name("NAME").required(true))
                        .arg(Arg::new("nationality").long("nationality").value_name("TEXT").required(true)),
                )
                .subcommand(Command::new("list").about("List all authors"))
                .subcommand(
                    Command::new("show")
                        .about("Show one author")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update an author")
                        .arg(Arg::new("id").required(true).value_name("ID"))
                        .arg(Arg::new("first-name").long("first-name").value_name("NAME"))
                        .arg(Arg::new("last-name").long("last-name").value_name("NAME"))
                        .arg(Arg::new("nationality").long("nationality").value_name("TEXT")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove an author permanently")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Manage categories")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Register a new category")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(Arg::new("description").long("description").value_name("TEXT").required(true)),
                )
                .subcommand(Command::new("list").about("List all categories"))
                .subcommand(
                    Command::new("show")
                        .about("Show one category")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a category")
                        .arg(Arg::new("id").required(true).value_name("ID"))
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("description").long("description").value_name("TEXT")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a category permanently")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(
            Command::new("books")
                .about("Manage the book catalog")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Register a new book")
                        .arg(Arg::new("title").long("title").value_name("TITLE").required(true))
                        .arg(Arg::new("isbn").long("isbn").value_name("ISBN").required(true))
                        .arg(Arg::new("author").long("author").value_name("AUTHOR_ID").required(true))
                        .arg(Arg::new("category").long("category").value_name("CATEGORY_ID").required(true))
                        .arg(Arg::new("year").long("year").value_name("YEAR").required(true))
                        .arg(Arg::new("copies").long("copies").value_name("COUNT").required(true)),
                )
                .subcommand(Command::new("list").about("List all books"))
                .subcommand(
                    Command::new("show")
                        .about("Show one book")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a book")
                        .arg(Arg::new("id").required(true).value_name("ID"))
                        .arg(Arg::new("title").long("title").value_name("TITLE"))
                        .arg(Arg::new("isbn").long("isbn").value_name("ISBN"))
                        .arg(Arg::new("author").long("author").value_name("AUTHOR_ID"))
                        .arg(Arg::new("category").long("category").value_name("CATEGORY_ID"))
                        .arg(Arg::new("year").long("year").value_name("YEAR"))
                        .arg(Arg::new("copies").long("copies").value_name("COUNT")),
                )
                .subcommand(
                    Command::new("deactivate")
                        .about("Soft-delete a book, keeping its history")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(
            Command::new("members")
                .about("Manage members")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Register a new member")
                        .arg(Arg::new("first-name").long("first-name").value_name("NAME").required(true))
                        .arg(Arg::new("last-name").long("last-name").value_name("NAME").required(true))
                        .arg(Arg::new("email").long("email").value_name("EMAIL").required(true))
                        .arg(Arg::new("phone").long("phone").value_name("PHONE").required(true))
                        .arg(Arg::new("address").long("address").value_name("ADDRESS").required(true)),
                )
                .subcommand(Command::new("list").about("List all members"))
                .subcommand(
                    Command::new("show")
                        .about("Show one member")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a member")
                        .arg(Arg::new("id").required(true).value_name("ID"))
                        .arg(Arg::new("first-name").long("first-name").value_name("NAME"))
                        .arg(Arg::new("last-name").long("last-name").value_name("NAME"))
                        .arg(Arg::new("email").long("email").value_name("EMAIL"))
                        .arg(Arg::new("phone").long("phone").value_name("PHONE"))
                        .arg(Arg::new("address").long("address").value_name("ADDRESS")),
                )
                .subcommand(
                    Command::new("deactivate")
                        .about("Soft-delete a member, keeping their history")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(
            Command::new("loans")
                .about("Manage loans")
                .subcommand_required(true)
                .subcommand(
                    Command::new("checkout")
                        .about("Check a book out to a member")
                        .arg(Arg::new("member").long("member").value_name("MEMBER_ID").required(true))
                        .arg(Arg::new("book").long("book").value_name("BOOK_ID").required(true))
                        .arg(Arg::new("date").long("date").value_name("DD/MM/YYYY").help("Backdate the loan")),
                )
                .subcommand(
                    Command::new("return")
                        .about("Process a book return")
                        .arg(Arg::new("id").required(true).value_name("LOAN_ID"))
                        .arg(Arg::new("date").long("date").value_name("DD/MM/YYYY").help("Backdate the return")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List loans")
                        .arg(
                            Arg::new("active")
                                .short('a')
                                .long("active")
                                .help("Show only loans still out")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one loan")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(
            Command::new("fines")
                .about("Manage fines")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Issue a fine manually")
                        .arg(Arg::new("member").long("member").value_name("MEMBER_ID").required(true))
                        .arg(Arg::new("amount").long("amount").value_name("AMOUNT").required(true))
                        .arg(Arg::new("reason").long("reason").value_name("TEXT").required(true))
                        .arg(Arg::new("date").long("date").value_name("DD/MM/YYYY").help("Backdate the fine")),
                )
                .subcommand(
                    Command::new("pay")
                        .about("Record payment of a fine")
                        .arg(Arg::new("id").required(true).value_name("FINE_ID"))
                        .arg(Arg::new("date").long("date").value_name("DD/MM/YYYY").help("Backdate the payment")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List fines")
                        .arg(
                            Arg::new("pending")
                                .short('p')
                                .long("pending")
                                .help("Show only unpaid fines, with the summed amount")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one fine")
                        .arg(Arg::new("id").required(true).value_name("ID")),
                ),
        )
        .subcommand(Command::new("menu").about("Interactive menu"))
        .subcommand(Command::new("seed").about("Populate a demonstration data set"))
        .subcommand(
            Command::new("config")
                .about("Manage the config file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Generate a default config file"))
                .subcommand(Command::new("show").about("Display the active configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn config_manager(matches: &clap::ArgMatches) -> Result<ConfigManager> {
    match matches.get_one::<String>("config") {
        Some(path) => Ok(ConfigManager::with_path(PathBuf::from(path))),
        None => ConfigManager::new().context("Failed to locate config directory"),
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let config_manager = config_manager(&matches)?;
    let config = config_manager.load_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.as_filter_str()),
    )
    .init();

    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.app.data_dir.clone());
    let store = Store::new(data_dir).context("Failed to open data directory")?;
    let manager = CirculationManager::new(store, config.circulation.clone());

    match matches.subcommand() {
        Some(("authors", sub)) => match sub.subcommand() {
            Some(("add", m)) => commands::add_author(manager.store(), m),
            Some(("list", _)) => commands::list_authors(manager.store()),
            Some(("show", m)) => commands::show_author(manager.store(), m),
            Some(("update", m)) => commands::update_author(manager.store(), m),
            Some(("remove", m)) => commands::remove_author(manager.store(), m),
            _ => unreachable!("subcommand required"),
        },
        Some(("categories", sub)) => match sub.subcommand() {
            Some(("add", m)) => commands::add_category(manager.store(), m),
            Some(("list", _)) => commands::list_categories(manager.store()),
            Some(("show", m)) => commands::show_category(manager.store(), m),
            Some(("update", m)) => commands::update_category(manager.store(), m),
            Some(("remove", m)) => commands::remove_category(manager.store(), m),
            _ => unreachable!("subcommand required"),
        },
        Some(("books", sub)) => match sub.subcommand() {
            Some(("add", m)) => commands::add_book(manager.store(), m),
            Some(("list", _)) => commands::list_books(manager.store()),
            Some(("show", m)) => commands::show_book(manager.store(), m),
            Some(("update", m)) => commands::update_book(manager.store(), m),
            Some(("deactivate", m)) => commands::deactivate_book(manager.store(), m),
            _ => unreachable!("subcommand required"),
        },
        Some(("members", sub)) => match sub.subcommand() {
            Some(("add", m)) => commands::add_member(manager.store(), m),
            Some(("list", _)) => commands::list_members(manager.store()),
            Some(("show", m)) => commands::show_member(manager.store(), m),
            Some(("update", m)) => commands::update_member(manager.store(), m),
            Some(("deactivate", m)) => commands::deactivate_member(manager.store(), m),
            _ => unreachable!("subcommand required"),
        },
        Some(("loans", sub)) => match sub.subcommand() {
            Some(("checkout", m)) => commands::checkout(&manager, m),
            Some(("return", m)) => commands::return_book(&manager, m),
            Some(("list", m)) => commands::list_loans(&manager, m),
            Some(("show", m)) => commands::show_loan(&manager, m),
            _ => unreachable!("subcommand required"),
        },
        Some(("fines", sub)) => match sub.subcommand() {
            Some(("add", m)) => commands::add_fine(&manager, m),
            Some(("pay", m)) => commands::pay_fine(&manager, m),
            Some(("list", m)) => commands::list_fines(&manager, m),
            Some(("show", m)) => commands::show_fine(&manager, m),
            _ => unreachable!("subcommand required"),
        },
        Some(("menu", _)) => menu::run(manager.store(), &manager),
        Some(("seed", _)) => seed::run(manager.store()),
        Some(("config", sub)) => match sub.subcommand() {
            Some(("init", _)) => commands::config_init(&config_manager),
            Some(("show", _)) => commands::config_show(&config_manager),
            Some(("path", _)) => commands::config_path(&config_manager),
            _ => unreachable!("subcommand required"),
        },
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
