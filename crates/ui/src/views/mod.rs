mod dashboard;
mod state;

pub use dashboard::DashboardView;
pub use state::{LoadState, ViewError};

#[cfg(test)]
mod view_smoke;
