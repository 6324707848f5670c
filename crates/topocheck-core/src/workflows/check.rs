use crate::core::io::lammps::LammpsDataFile;
use crate::core::io::traits::TopologyFile;
use crate::core::models::interaction::Category;
use crate::core::models::topology::Topology;
use crate::core::rules::allowlist::AllowLists;
use crate::engine::config::CheckConfig;
use crate::engine::error::CheckError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::validator::validate;
use std::fmt;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,
    pub checked: usize,
}

impl fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} found", self.checked, self.category.plural())
    }
}

/// Per-category counts of a successful check, in validation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub categories: Vec<CategoryReport>,
}

impl CheckReport {
    pub fn checked(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|r| r.category == category)
            .map_or(0, |r| r.checked)
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|r| r.checked).sum()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.categories.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}

/// Validates an already-parsed topology against the allow-lists.
///
/// Categories are checked in the order bonds, angles, dihedrals, impropers. The
/// first error stops the run; no partial report is returned.
#[instrument(skip_all, name = "check_workflow")]
pub fn run(
    topology: &Topology,
    allow_lists: &AllowLists,
    config: &CheckConfig,
    reporter: &ProgressReporter,
) -> Result<CheckReport, CheckError> {
    reporter.report(Progress::PhaseStart { name: "Validation" });
    info!(
        "Validating topology with {} atoms (unknown interaction types: {}).",
        topology.atoms.len(),
        config.unknown_type_policy
    );

    let atoms = &topology.atoms;
    let counts = [
        validate(atoms, &topology.bonds, &allow_lists.bonds, config, reporter)?,
        validate(atoms, &topology.angles, &allow_lists.angles, config, reporter)?,
        validate(
            atoms,
            &topology.dihedrals,
            &allow_lists.dihedrals,
            config,
            reporter,
        )?,
        validate(
            atoms,
            &topology.impropers,
            &allow_lists.impropers,
            config,
            reporter,
        )?,
    ];

    let categories: Vec<CategoryReport> = Category::ALL
        .into_iter()
        .zip(counts)
        .map(|(category, checked)| CategoryReport { category, checked })
        .collect();

    reporter.report(Progress::PhaseFinish);
    let report = CheckReport { categories };
    info!("Topology is consistent: {} interactions checked.", report.total());
    Ok(report)
}

/// Reads the data file and allow-list file, then runs [`run`].
pub fn run_from_paths(
    data_path: &Path,
    allow_list_path: &Path,
    config: &CheckConfig,
    reporter: &ProgressReporter,
) -> Result<CheckReport, CheckError> {
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    info!("Reading topology from {:?}", data_path);
    let topology = LammpsDataFile::read_from_path(data_path)?;
    reporter.report(Progress::Message(format!(
        "{} atoms, {} bonds, {} angles, {} dihedrals, {} impropers",
        topology.atoms.len(),
        topology.bonds.len(),
        topology.angles.len(),
        topology.dihedrals.len(),
        topology.impropers.len()
    )));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Loading allow-lists",
    });
    info!("Loading allow-lists from {:?}", allow_list_path);
    let allow_lists = AllowLists::load(allow_list_path)?;
    reporter.report(Progress::PhaseFinish);

    run(&topology, &allow_lists, config, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::interaction::{Angle, Bond, Dihedral, Improper};
    use crate::engine::config::UnknownTypePolicy;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const ZIF8_FRAGMENT: &str = "\
ZIF-8 fragment with one water molecule

Masses

1 15.999
2 1.008
4 65.38
5 12.011
7 1.008
11 14.007

Atoms # full

1 1 1 -0.8476 0.0 0.0 0.0
2 1 2 0.4238 0.8 0.6 0.0
3 1 2 0.4238 -0.8 0.6 0.0
4 2 4 0.0 5.0 5.0 5.0
5 2 11 0.0 6.0 5.0 5.0
6 2 5 0.0 7.0 5.0 5.0
7 2 11 0.0 6.5 6.0 5.0
8 2 7 0.0 8.0 5.0 5.0

Bonds

1 1 1 2
2 1 1 3
3 2 4 5
4 3 5 6

Angles

1 1 2 1 3
2 2 4 5 6

Dihedrals

1 1 4 5 6 7

Impropers

1 1 6 5 7 8
";

    const ZIF8_RULES: &str = r#"
        [bonds]
        1 = [[1, 2]]
        2 = [[4, 11]]
        3 = [[5, 11]]

        [angles]
        1 = [[2, 1, 2]]
        2 = [[4, 11, 5]]

        [dihedrals]
        1 = [[11, 5, 11, 4]]

        [impropers]
        1 = [[11, 11, 7, 5]]
    "#;

    fn fragment() -> Topology {
        LammpsDataFile::read_from(&mut Cursor::new(ZIF8_FRAGMENT)).unwrap()
    }

    fn rules() -> AllowLists {
        AllowLists::from_toml_str(ZIF8_RULES).unwrap()
    }

    fn run_default(
        topology: &Topology,
        allow_lists: &AllowLists,
    ) -> Result<CheckReport, CheckError> {
        run(
            topology,
            allow_lists,
            &CheckConfig::default(),
            &ProgressReporter::new(),
        )
    }

    #[test]
    fn consistent_fragment_reports_every_category() {
        let report = run_default(&fragment(), &rules()).unwrap();
        assert_eq!(report.checked(Category::Bond), 4);
        assert_eq!(report.checked(Category::Angle), 2);
        assert_eq!(report.checked(Category::Dihedral), 1);
        assert_eq!(report.checked(Category::Improper), 1);
        assert_eq!(report.total(), 8);
        assert_eq!(
            report.to_string(),
            "4 bonds found\n2 angles found\n1 dihedrals found\n1 impropers found"
        );
    }

    #[test]
    fn counts_equal_input_sizes() {
        let topology = fragment();
        let report = run_default(&topology, &rules()).unwrap();
        for category in Category::ALL {
            assert_eq!(report.checked(category), topology.count(category));
        }
    }

    #[test]
    fn running_twice_gives_identical_results() {
        let topology = fragment();
        let allow_lists = rules();
        let first = run_default(&topology, &allow_lists).unwrap();
        let second = run_default(&topology, &allow_lists).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_allowed_bond_reports_one_bond() {
        let topology = Topology {
            atoms: [(1, 5), (2, 7)].into_iter().collect(),
            bonds: vec![Bond::new(1, [1, 2])],
            ..Topology::default()
        };
        let allow_lists = AllowLists::from_toml_str("[bonds]\n1 = [[5, 7]]\n").unwrap();
        let report = run_default(&topology, &allow_lists).unwrap();
        assert_eq!(report.categories[0].to_string(), "1 bonds found");
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn disallowed_bond_fails_with_context() {
        let topology = Topology {
            atoms: [(1, 5), (2, 7)].into_iter().collect(),
            bonds: vec![Bond::new(1, [1, 2])],
            ..Topology::default()
        };
        let allow_lists = AllowLists::from_toml_str("[bonds]\n1 = [[3, 9]]\n").unwrap();
        let err = run_default(&topology, &allow_lists).unwrap_err();
        assert!(err.is_validation_failure());
        let message = err.to_string();
        assert!(message.contains("Inconsistent bond found"));
        assert!(message.contains("Bond type: 1"));
        assert!(message.contains("Atoms: 1-2"));
        assert!(message.contains("Atom types: 5-7"));
        assert!(message.contains("Allowed types: (3,9)"));
    }

    #[test]
    fn improper_ignores_atom_order() {
        let topology = Topology {
            atoms: [(1, 1), (2, 2), (3, 3), (4, 4)].into_iter().collect(),
            impropers: vec![Improper::new(1, [1, 2, 3, 4])],
            ..Topology::default()
        };
        let allow_lists = AllowLists::from_toml_str("[impropers]\n1 = [[4, 3, 2, 1]]\n").unwrap();
        let report = run_default(&topology, &allow_lists).unwrap();
        assert_eq!(report.checked(Category::Improper), 1);
    }

    #[test]
    fn dangling_atom_aborts_without_report() {
        let topology = Topology {
            atoms: [(1, 5), (2, 7)].into_iter().collect(),
            bonds: vec![Bond::new(1, [1, 99])],
            ..Topology::default()
        };
        let err = run_default(&topology, &AllowLists::default()).unwrap_err();
        assert!(matches!(
            err,
            CheckError::DanglingReference { atom_id: 99, .. }
        ));
        assert!(!err.is_validation_failure());
    }

    #[test]
    fn earlier_category_failure_hides_later_ones() {
        let topology = Topology {
            atoms: [(1, 1), (2, 2), (3, 3), (4, 4)].into_iter().collect(),
            bonds: vec![Bond::new(1, [1, 2])],
            angles: vec![Angle::new(1, [1, 2, 3])],
            dihedrals: vec![Dihedral::new(1, [1, 2, 3, 4])],
            impropers: Vec::new(),
        };
        let allow_lists = AllowLists::from_toml_str(
            "[angles]\n1 = [[9, 9, 9]]\n[dihedrals]\n1 = [[9, 9, 9, 9]]\n",
        )
        .unwrap();
        match run_default(&topology, &allow_lists).unwrap_err() {
            CheckError::InconsistentTopology(report) => {
                assert_eq!(report.category, Category::Angle)
            }
            other => panic!("Expected InconsistentTopology, got {other:?}"),
        }
    }

    #[test]
    fn strict_policy_rejects_unlisted_types() {
        let config = CheckConfig {
            unknown_type_policy: UnknownTypePolicy::Reject,
        };
        let mut allow_lists = rules();
        allow_lists.impropers = AllowLists::default().impropers;
        let err = run(&fragment(), &allow_lists, &config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            CheckError::UnknownInteractionType {
                category: Category::Improper,
                type_id: 1,
                ..
            }
        ));
    }

    #[test]
    fn run_from_paths_reads_both_files() {
        let dir = tempdir().unwrap();
        let data_path = dir.path().join("topology.data");
        let rules_path = dir.path().join("allowed.toml");
        fs::write(&data_path, ZIF8_FRAGMENT).unwrap();
        fs::write(&rules_path, ZIF8_RULES).unwrap();

        let report = run_from_paths(
            &data_path,
            &rules_path,
            &CheckConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(report.total(), 8);
    }

    #[test]
    fn run_from_paths_surfaces_malformed_input() {
        let dir = tempdir().unwrap();
        let data_path = dir.path().join("topology.data");
        let rules_path = dir.path().join("allowed.toml");
        fs::write(&data_path, "Bonds\n\n1 1 1 two\n").unwrap();
        fs::write(&rules_path, ZIF8_RULES).unwrap();

        let err = run_from_paths(
            &data_path,
            &rules_path,
            &CheckConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CheckError::MalformedInput(_)));
    }

    #[test]
    fn run_from_paths_surfaces_allow_list_errors() {
        let dir = tempdir().unwrap();
        let data_path = dir.path().join("topology.data");
        fs::write(&data_path, ZIF8_FRAGMENT).unwrap();

        let err = run_from_paths(
            &data_path,
            &dir.path().join("missing.toml"),
            &CheckConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CheckError::AllowList(_)));
    }
}
