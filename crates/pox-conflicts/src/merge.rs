use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pox_advisories::{Advisory, Component, VersionConstraint};

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Version constraints to merge, such as ">=1.0,<1.1"
    #[arg(required = true)]
    pub constraints: Vec<String>,

    /// Print every remaining constraint on its own line
    #[arg(long)]
    pub list: bool,
}

pub fn execute(args: MergeArgs) -> Result<i32> {
    for line in merged_lines(&args)? {
        println!("{}", line);
    }

    Ok(0)
}

/// Lines printed by the merge command: one conflict rule, or one constraint per line with `--list`
fn merged_lines(args: &MergeArgs) -> Result<Vec<String>> {
    let constraints: Vec<VersionConstraint> = args
        .constraints
        .iter()
        .map(|constraint| VersionConstraint::parse(constraint))
        .collect();

    for constraint in constraints.iter().filter(|constraint| !constraint.is_simple()) {
        log::warn!("\"{}\" is not a simple range and will not be merged", constraint);
    }

    let component = Component::new("", vec![Advisory::new("", constraints)]);

    if !args.list {
        return Ok(vec![component.conflict_constraint()?]);
    }

    Ok(component
        .deduplicated_constraints()?
        .into_iter()
        .map(|constraint| {
            if constraint.is_simple() {
                constraint.to_string()
            } else {
                format!("{} {}", constraint, "(complex)".yellow())
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(constraints: &[&str], list: bool) -> MergeArgs {
        MergeArgs {
            constraints: constraints.iter().map(|c| c.to_string()).collect(),
            list,
        }
    }

    #[test]
    fn test_merges_into_single_rule() {
        let constraints = [">=1.0,<1.1", ">=1.0.1,<1.0.99", ">=2.0,<2.1", ">=2.0.1,<2.1"];
        let lines = merged_lines(&args(&constraints, false)).unwrap();

        assert_eq!(lines, vec![">=1,<1.1|>=2,<2.1"]);
    }

    #[test]
    fn test_unbounded_merge_prints_empty_line() {
        let lines = merged_lines(&args(&["<3", ">2"], false)).unwrap();

        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_list_prints_each_constraint() {
        let lines = merged_lines(&args(&[">1,<2", ">1.5,<3", "~2.0", ">=5"], true)).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ">1,<3");
        assert!(lines[1].starts_with("~2.0 "));
        assert!(lines[1].contains("(complex)"));
        assert_eq!(lines[2], ">=5");
    }

    #[test]
    fn test_complex_constraint_is_kept_in_rule() {
        let lines = merged_lines(&args(&["~2.0", "<1"], false)).unwrap();

        assert_eq!(lines, vec!["~2.0|<1"]);
    }

    #[test]
    fn test_execute_succeeds() {
        assert_eq!(execute(args(&[">=1,<2"], true)).unwrap(), 0);
    }
}
