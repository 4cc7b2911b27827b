//! Category CLI commands

use clap::Subcommand;
use std::io::Write;

use crate::display::format_category_list;
use crate::error::TrackerResult;
use crate::services::ExpenseManager;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category (duplicate names are allowed)
    Add {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Add a category, refusing a name that already exists
    New {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Replace the description of a category
    Describe {
        /// Category name
        name: String,
        /// New description
        description: String,
    },

    /// List all categories
    List,
}

/// Handle a category command
pub fn handle_category_command<W: Write>(
    manager: &mut ExpenseManager,
    cmd: CategoryCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::Add { name, description } => {
            let category = manager.add_category(&name, &description);
            writeln!(out, "Added category: {}", category)?;
        }

        CategoryCommands::New { name, description } => {
            let category = manager.add_new_category(&name, &description)?;
            writeln!(out, "Added category: {}", category)?;
        }

        CategoryCommands::Describe { name, description } => {
            manager.update_category_description(&name, &description)?;
            writeln!(out, "Updated category: {}", name)?;
        }

        CategoryCommands::List => {
            write!(out, "{}", format_category_list(manager.categories()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    #[test]
    fn test_add_and_new() {
        let mut manager = ExpenseManager::new();
        let mut out = Vec::new();

        let add = CategoryCommands::Add {
            name: "Food".into(),
            description: "Groceries".into(),
        };
        handle_category_command(&mut manager, add, &mut out).unwrap();

        let duplicate = CategoryCommands::New {
            name: "Food".into(),
            description: String::new(),
        };
        let err = handle_category_command(&mut manager, duplicate, &mut out).unwrap_err();

        assert!(matches!(err, TrackerError::DuplicateCategory(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "Added category: Food\n");
        assert_eq!(manager.categories().len(), 1);
    }

    #[test]
    fn test_describe_missing() {
        let mut manager = ExpenseManager::new();
        let cmd = CategoryCommands::Describe {
            name: "Food".into(),
            description: "x".into(),
        };

        let err = handle_category_command(&mut manager, cmd, &mut Vec::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
