mod checklist;
mod link_anchor;
mod links;
mod notice;
mod panels;
mod progress_bar;
mod repo_details;
mod stage_list;
mod summary;

pub use checklist::ChecklistPanelBody;
pub use links::LinksPanelBody;
pub use notice::NoticeModal;
pub use panels::{PanelOverlay, SlidePanel};
pub use progress_bar::ProgressBar;
pub use repo_details::RepoDetails;
pub use stage_list::StageList;
pub use summary::SummaryCard;
