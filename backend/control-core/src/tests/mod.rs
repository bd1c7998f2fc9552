mod error;
mod groups;
mod paths;
mod token;
