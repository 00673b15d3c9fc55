mod deployment;
mod summary;

pub use self::deployment::DeploymentRow;
pub use self::summary::SummaryRow;
