//! # Menus
//!
//! The interactive loop: menus, prompts, printing. All logic lives in
//! [`commands`](crate::commands); this module only asks and shows.
//!
//! ## Menu Tree
//! ```text
//! Main
//! ├── List consumption (chronological)
//! ├── List consumption (reverse)
//! ├── Search ──► Sequential | Binary  ──► name prompt
//! ├── Sort   ──► Quantities (Merge Sort) | Quantities (Quick Sort) | By expiry
//! ├── Register consumption ──► name, quantity, expiry prompts
//! └── Exit
//! ```
//!
//! Esc backs out of any prompt to the enclosing menu (or exits from the main
//! menu). Ctrl-C surfaces as [`AppError::Interrupted`].

use std::fmt;

use inquire::error::CustomUserError;
use inquire::validator::{ErrorMessage, Validation};
use inquire::{InquireError, Select, Text};
use supply_core::validation::{validate_expiry, validate_item_name, validate_quantity};
use supply_core::{Item, NameResolution, ValidationError};
use tracing::{debug, warn};

use crate::commands::{self, ListOrder, SearchStrategy, SortAlgorithm};
use crate::config::ConsoleConfig;
use crate::error::{AppError, AppResult};
use crate::render;
use crate::state::LedgerState;

// =============================================================================
// Menu Options
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainOption {
    ListChronological,
    ListReverse,
    Search,
    Sort,
    Register,
    Exit,
}

impl MainOption {
    const ALL: [MainOption; 6] = [
        MainOption::ListChronological,
        MainOption::ListReverse,
        MainOption::Search,
        MainOption::Sort,
        MainOption::Register,
        MainOption::Exit,
    ];
}

impl fmt::Display for MainOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MainOption::ListChronological => "List consumption (queue, chronological)",
            MainOption::ListReverse => "List consumption (stack, reverse)",
            MainOption::Search => "Search item",
            MainOption::Sort => "Sort",
            MainOption::Register => "Register consumption",
            MainOption::Exit => "Exit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOption {
    Run(SearchStrategy),
    Back,
}

impl fmt::Display for SearchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOption::Run(strategy) => write!(f, "{strategy} search (exact)"),
            SearchOption::Back => f.write_str("Back to main menu"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOption {
    Quantities(SortAlgorithm),
    ByExpiry,
    Back,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Quantities(algorithm) => write!(f, "Sort quantities ({algorithm})"),
            SortOption::ByExpiry => f.write_str("Sort items by expiry"),
            SortOption::Back => f.write_str("Back to main menu"),
        }
    }
}

/// One registered item offered when several share the typed name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchChoice {
    index: usize,
    item: Item,
}

impl fmt::Display for MatchChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.item)
    }
}

/// A resolved name, plus the ledger index the user picked on collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchTarget {
    name: String,
    pick: Option<usize>,
}

// =============================================================================
// Console
// =============================================================================

/// One interactive session.
pub struct Console {
    state: LedgerState,
    config: ConsoleConfig,
}

impl Console {
    /// Starts a session with the configured seed ledger.
    pub fn new(config: ConsoleConfig) -> Self {
        let state = LedgerState::new(config.seed_ledger());
        debug!(items = state.len(), "Session ledger seeded");
        Console { state, config }
    }

    /// Runs the main menu until the user exits.
    pub fn run(&self) -> AppResult<()> {
        loop {
            let choice = optional(
                Select::new("Supply tracker", MainOption::ALL.to_vec())
                    .with_page_size(MainOption::ALL.len())
                    .prompt(),
            )?;

            match choice {
                None | Some(MainOption::Exit) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Some(MainOption::ListChronological) => {
                    println!("Queue (chronological order):");
                    self.print_list(ListOrder::Chronological);
                }
                Some(MainOption::ListReverse) => {
                    println!("Stack (reverse order):");
                    self.print_list(ListOrder::Reverse);
                }
                Some(MainOption::Search) => self.search_menu()?,
                Some(MainOption::Sort) => self.sort_menu()?,
                Some(MainOption::Register) => self.register()?,
            }
        }
    }

    fn print_list(&self, order: ListOrder) {
        let items = commands::list_items(&self.state, order);
        print!("{}", render::item_table(&items));
    }

    fn search_menu(&self) -> AppResult<()> {
        let options = vec![
            SearchOption::Run(SearchStrategy::Sequential),
            SearchOption::Run(SearchStrategy::Binary),
            SearchOption::Back,
        ];

        loop {
            let strategy = match optional(Select::new("Search", options.clone()).prompt())? {
                Some(SearchOption::Run(strategy)) => strategy,
                None | Some(SearchOption::Back) => return Ok(()),
            };

            if self.state.is_empty() {
                println!("Nothing registered yet.");
                continue;
            }

            let Some(target) = self.prompt_search_target()? else {
                continue;
            };

            let report = commands::search(&self.state, strategy, &target.name, target.pick)?;
            println!("{}", render::search_report(&report));
        }
    }

    fn sort_menu(&self) -> AppResult<()> {
        let options = vec![
            SortOption::Quantities(SortAlgorithm::MergeSort),
            SortOption::Quantities(SortAlgorithm::QuickSort),
            SortOption::ByExpiry,
            SortOption::Back,
        ];

        loop {
            match optional(Select::new("Sort", options.clone()).prompt())? {
                Some(SortOption::Quantities(algorithm)) => {
                    let sorted = commands::sort_quantities(&self.state, algorithm);
                    println!("{}", render::quantities(algorithm, &sorted));
                }
                Some(SortOption::ByExpiry) => {
                    println!("Items by expiry (undated last):");
                    print!("{}", render::item_table(&commands::items_by_expiry(&self.state)));
                }
                None | Some(SortOption::Back) => return Ok(()),
            }
        }
    }

    /// Asks for a name until it resolves to registered items. When several
    /// items share the name, the user picks one of them.
    ///
    /// Returns `None` if the user backs out.
    fn prompt_search_target(&self) -> AppResult<Option<SearchTarget>> {
        let options = self.state.with_ledger(|ledger| ledger.names().join(", "));
        let help = format!("Options: {options} (Esc to go back)");

        loop {
            let Some(query) = optional(Text::new("Item name").with_help_message(&help).prompt())?
            else {
                return Ok(None);
            };

            let resolution =
                commands::resolve(&self.state, &query, self.config.search.max_suggestions);
            match resolution {
                NameResolution::Empty => println!("Empty input. Try again."),
                NameResolution::Numeric => println!("The name cannot be numeric. Try again."),
                NameResolution::Suggestions(names) => {
                    println!("Item not found. Did you mean: {}?", names.join(", "));
                }
                NameResolution::NotFound => {
                    println!("Item not found. Use one of the listed names.");
                }
                NameResolution::Matched(_) => {
                    let choices = match_choices(commands::matches_for(&self.state, &query));
                    if choices.len() <= 1 {
                        return Ok(Some(SearchTarget {
                            name: query,
                            pick: None,
                        }));
                    }
                    return self.pick_among(query, choices);
                }
            }
        }
    }

    /// Several items share the typed name: let the user choose one.
    fn pick_among(
        &self,
        query: String,
        choices: Vec<MatchChoice>,
    ) -> AppResult<Option<SearchTarget>> {
        warn!(query = %query, count = choices.len(), "Name matches several items");

        let prompt = format!("'{query}' matches {} registered items. Which one?", choices.len());
        let choice = optional(Select::new(&prompt, choices).prompt())?;

        Ok(choice.map(|choice| SearchTarget {
            name: query,
            pick: Some(choice.index),
        }))
    }

    fn register(&self) -> AppResult<()> {
        let Some(name) = optional(
            Text::new("Item name")
                .with_validator(field_validator(validate_item_name))
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let Some(quantity) = optional(
            Text::new("Quantity consumed")
                .with_validator(field_validator(validate_quantity))
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let Some(expiry) = optional(
            Text::new("Expiry (YYYY-MM-DD)")
                .with_help_message("A 'Validade:' prefix is accepted")
                .with_validator(field_validator(validate_expiry))
                .prompt(),
        )?
        else {
            return Ok(());
        };

        let item = commands::register_item(&self.state, &name, &quantity, &expiry)?;
        println!("Registered {item}.");
        Ok(())
    }
}

// =============================================================================
// Prompt Helpers
// =============================================================================

fn match_choices(matches: Vec<(usize, Item)>) -> Vec<MatchChoice> {
    matches
        .into_iter()
        .map(|(index, item)| MatchChoice { index, item })
        .collect()
}

/// Maps Esc to `None`; every other prompt failure is an error.
fn optional<T>(result: Result<T, InquireError>) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(AppError::from(err)),
    }
}

/// Adapts a supply-core field validator to an inquire validator.
fn field_validator<T: 'static>(
    check: fn(&str) -> Result<T, ValidationError>,
) -> impl Fn(&str) -> Result<Validation, CustomUserError> + Clone + 'static {
    move |input: &str| {
        Ok(match check(input) {
            Ok(_) => Validation::Valid,
            Err(err) => Validation::Invalid(ErrorMessage::Custom(err.to_string())),
        })
    }
}
