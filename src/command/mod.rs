mod commands;
mod history;

pub use commands::Command;
pub use history::DrawingHistory;
