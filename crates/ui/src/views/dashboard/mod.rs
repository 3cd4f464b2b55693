mod actions;
mod components;
mod scripts;
mod state;
mod view;

pub use view::DashboardView;

#[cfg(test)]
pub(crate) use actions::DashboardIntent;
#[cfg(test)]
pub(crate) use state::DashboardState;
#[cfg(test)]
pub(crate) use view::DashboardTestHandles;
