mod cli;
mod output;
