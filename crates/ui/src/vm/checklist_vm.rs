use tracker_core::checklist::{ChecklistGroup, ChecklistState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistRowVm {
    pub title: &'static str,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistGroupVm {
    pub title: &'static str,
    pub rows: Vec<ChecklistRowVm>,
}

#[must_use]
pub fn map_checklist_groups(
    catalog: &[ChecklistGroup],
    state: &ChecklistState,
) -> Vec<ChecklistGroupVm> {
    catalog
        .iter()
        .map(|group| ChecklistGroupVm {
            title: group.title,
            rows: group
                .tasks
                .iter()
                .map(|&title| ChecklistRowVm {
                    title,
                    checked: state.is_checked(title),
                })
                .collect(),
        })
        .collect()
}
