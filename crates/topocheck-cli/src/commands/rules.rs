use crate::cli::RulesArgs;
use crate::error::Result;
use std::fmt::Write;
use topocheck::core::rules::allowlist::{AllowList, AllowLists};
use topocheck::engine::error::CheckError;
use tracing::info;

pub fn run(args: RulesArgs) -> Result<()> {
    info!("Loading allow-lists from {:?}", &args.allow_list);
    let allow_lists = AllowLists::load(&args.allow_list).map_err(CheckError::from)?;
    print!("{}", format_rules(&allow_lists));
    Ok(())
}

/// Renders every rule, grouped by category in validation order.
pub fn format_rules(allow_lists: &AllowLists) -> String {
    let mut out = String::new();
    write_list(&mut out, &allow_lists.bonds);
    write_list(&mut out, &allow_lists.angles);
    write_list(&mut out, &allow_lists.dihedrals);
    write_list(&mut out, &allow_lists.impropers);
    out
}

fn write_list<const N: usize>(out: &mut String, list: &AllowList<N>) {
    let _ = writeln!(out, "{} ({} types):", list.category().plural(), list.len());
    if list.is_empty() {
        let _ = writeln!(out, "  (no rules; every type is unconstrained)");
        return;
    }
    for type_id in list.type_ids() {
        let _ = writeln!(
            out,
            "  {}: {}",
            type_id,
            list.render_patterns(type_id).join(" ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    const RULES: &str = r#"
        [bonds]
        1 = [[5, 7], [3, 9]]
        2 = [[4, 11]]

        [impropers]
        1 = [[5, 11, 11, 7]]
    "#;

    #[test]
    fn rules_are_grouped_by_category() {
        let lists = AllowLists::from_toml_str(RULES).unwrap();
        let text = format_rules(&lists);
        assert_eq!(
            text,
            "bonds (2 types):\n  1: (5,7) (3,9)\n  2: (4,11)\n\
             angles (0 types):\n  (no rules; every type is unconstrained)\n\
             dihedrals (0 types):\n  (no rules; every type is unconstrained)\n\
             impropers (1 types):\n  1: {5,11,11,7}\n"
        );
    }

    #[test]
    fn missing_allow_list_file_is_a_non_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(RulesArgs {
            allow_list: dir.path().join("absent.toml"),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Check(_)));
        assert_eq!(err.exit_code(), crate::error::EXIT_OTHER_FAILURE);
    }
}
