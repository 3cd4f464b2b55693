use crate::model::Stage;

/// One submitted link, as listed in the links panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub task_title: String,
    pub repo_title: String,
    pub link: String,
}

/// Links grouped under a stage title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroup {
    pub stage_title: String,
    pub entries: Vec<LinkEntry>,
}

/// Collect every task link in the hierarchy, grouped by stage title.
///
/// Groups are keyed by title, not id, so stages sharing a title share a group.
/// Groups and entries keep encounter order.
#[must_use]
pub fn group_links(stages: &[Stage]) -> Vec<LinkGroup> {
    let mut groups: Vec<LinkGroup> = Vec::new();
    for stage in stages {
        for repo in &stage.repositories {
            for task in &repo.tasks {
                let Some(link) = task.submitted_link() else {
                    continue;
                };
                let entry = LinkEntry {
                    task_title: task.title.clone(),
                    repo_title: repo.title.clone(),
                    link: link.to_owned(),
                };
                match groups
                    .iter_mut()
                    .find(|group| group.stage_title == stage.title)
                {
                    Some(group) => group.entries.push(entry),
                    None => groups.push(LinkGroup {
                        stage_title: stage.title.clone(),
                        entries: vec![entry],
                    }),
                }
            }
        }
    }
    groups
}
