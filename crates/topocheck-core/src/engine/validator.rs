use super::config::{CheckConfig, UnknownTypePolicy};
use super::error::{CheckError, Inconsistency};
use super::progress::{Progress, ProgressReporter};
use crate::core::models::atom::AtomTable;
use crate::core::models::interaction::{Category, Interaction};
use crate::core::rules::allowlist::{AllowList, Verdict};
use crate::core::rules::pattern::Pattern;
use tracing::debug;

const PROGRESS_STRIDE: usize = 4096;

/// Checks every interaction of one category against its allow-list.
///
/// Interactions are visited in file order and the first one that cannot be resolved
/// or is not permitted aborts the check.
///
/// # Return
///
/// Returns the number of interactions checked, which on success is always the
/// length of `interactions`.
///
/// # Errors
///
/// - [`CheckError::DanglingReference`] if an interaction names an atom missing from `atoms`.
/// - [`CheckError::InconsistentTopology`] if a constrained interaction type does not allow
///   the observed atom types under the category's symmetry.
/// - [`CheckError::UnknownInteractionType`] if the type has no rule and the config rejects
///   unknown types.
pub fn validate<const N: usize>(
    atoms: &AtomTable,
    interactions: &[Interaction<N>],
    allow_list: &AllowList<N>,
    config: &CheckConfig,
    reporter: &ProgressReporter,
) -> Result<usize, CheckError> {
    let category = allow_list.category();
    reporter.report(Progress::CategoryStart {
        category,
        total: interactions.len() as u64,
    });

    for (index, interaction) in interactions.iter().enumerate() {
        let observed = resolve_types(atoms, category, interaction)?;

        match allow_list.permits(interaction.type_id, &observed) {
            Verdict::Allowed => {}
            Verdict::Unconstrained => {
                if config.unknown_type_policy == UnknownTypePolicy::Reject {
                    return Err(CheckError::UnknownInteractionType {
                        category,
                        type_id: interaction.type_id,
                        line: interaction.line,
                    });
                }
            }
            Verdict::Rejected => {
                return Err(CheckError::InconsistentTopology(Box::new(Inconsistency {
                    category,
                    type_id: interaction.type_id,
                    atoms: interaction.atoms.to_vec(),
                    atom_types: observed.types().to_vec(),
                    allowed: allow_list.render_patterns(interaction.type_id),
                    line: interaction.line,
                })));
            }
        }

        if (index + 1) % PROGRESS_STRIDE == 0 {
            reporter.report(Progress::CategoryAdvance {
                checked: (index + 1) as u64,
            });
        }
    }

    let checked = interactions.len();
    reporter.report(Progress::CategoryFinish {
        category,
        checked: checked as u64,
    });
    debug!("All {} {} are consistent.", checked, category.plural());
    Ok(checked)
}

/// Looks up the type of every atom of `interaction`, preserving file order.
pub fn resolve_types<const N: usize>(
    atoms: &AtomTable,
    category: Category,
    interaction: &Interaction<N>,
) -> Result<Pattern<N>, CheckError> {
    let mut types = [0; N];
    for (slot, &atom_id) in types.iter_mut().zip(interaction.atoms.iter()) {
        *slot = atoms
            .type_of(atom_id)
            .ok_or(CheckError::DanglingReference {
                category,
                type_id: interaction.type_id,
                atom_id,
                line: interaction.line,
            })?;
    }
    Ok(Pattern(types))
}
