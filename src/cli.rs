use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gatecrash")]
#[command(version, about = "Concurrent web path and login brute-force engine")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Dir {
        url: String,

        #[arg(short, long)]
        wordlist: String,

        #[arg(short = 't', long, default_value = "10")]
        concurrency: usize,

        #[arg(short, long, num_args = 1.., default_values_t = [".php".to_string(), ".html".to_string()])]
        extensions: Vec<String>,

        #[arg(short, long, default_value = "0.1")]
        delay: f64,

        #[arg(short, long)]
        cookies: Option<String>,

        #[arg(short = 'H', long)]
        headers: Option<String>,

        #[arg(short, long, num_args = 1..)]
        indicators: Vec<String>,

        #[arg(long, value_delimiter = ',', default_value = "200,301,302,403")]
        codes: Vec<u16>,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },

    Login {
        url: String,

        #[arg(short, long)]
        wordlist: String,

        #[arg(short, long, default_value = "admin")]
        username: String,

        #[arg(short = 't', long, default_value = "5")]
        concurrency: usize,

        #[arg(short, long, default_value = "1.0")]
        delay: f64,

        #[arg(short, long, num_args = 1.., default_values_t = ["Control Panel".to_string()])]
        indicators: Vec<String>,

        #[arg(long)]
        fields: Option<String>,

        #[arg(long, default_value = "login")]
        form_name: String,

        #[arg(long, default_value = "username")]
        user_field: String,

        #[arg(long, default_value = "passwd")]
        pass_field: String,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },
}
