mod history;
mod progress;
