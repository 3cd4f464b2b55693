use tracker_core::links::group_links;
use tracker_core::model::Stage;

use super::link_vm::LinkVm;

pub const NO_LINKS: &str = "No links submitted yet.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEntryVm {
    pub task_title: String,
    pub repo_title: String,
    pub link: LinkVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkGroupVm {
    pub stage_title: String,
    pub entries: Vec<LinkEntryVm>,
}

#[must_use]
pub fn map_link_groups(stages: &[Stage]) -> Vec<LinkGroupVm> {
    group_links(stages)
        .into_iter()
        .map(|group| LinkGroupVm {
            stage_title: group.stage_title,
            entries: group
                .entries
                .into_iter()
                .map(|entry| LinkEntryVm {
                    link: LinkVm::new(&entry.link),
                    task_title: entry.task_title,
                    repo_title: entry.repo_title,
                })
                .collect(),
        })
        .collect()
}
