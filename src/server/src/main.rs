use libformdrop::config::ServerConfig;
use libformdrop::constants::{DEFAULT_INDEX_FILE, FORMDROP_VERSION};
use libformdrop::error::FormdropError;
use libformdrop::storage::LocalEntryStore;
use libformdrop::util;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod params;
pub mod routes;


extern crate dotenv;
extern crate log;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::{Arg, ArgMatches, Command};
use std::io;
use std::path::PathBuf;

const ABOUT: &str = "📮 formdrop stores form submissions as JSON files";

const START_SERVER_USAGE: &str = "Usage: `formdrop-server start --ip 0.0.0.0 --port 3000`";

const START_SERVER_ENV: &str = "Environment: FORMDROP_HOST, FORMDROP_PORT, FORMDROP_DATA_DIR and FORMDROP_PUBLIC_DIR override the config file, flags override both";

fn start_cmd() -> Command {
    Command::new("start")
        .about(START_SERVER_USAGE)
        .after_help(START_SERVER_ENV)
        .arg(
            Arg::new("ip")
                .long("ip")
                .short('i')
                .help("What host to bind the server to"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16))
                .help("What port to bind the server to"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .short('d')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory the entries are stored in"),
        )
        .arg(
            Arg::new("public-dir")
                .long("public-dir")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory of static files served at /"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
}

/// Flags passed to `start` win over everything the config already holds
fn apply_flags(mut config: ServerConfig, matches: &ArgMatches) -> ServerConfig {
    if let Some(host) = matches.get_one::<String>("ip") {
        config.host = host.to_owned();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(data_dir) = matches.get_one::<PathBuf>("data-dir") {
        config.data_dir = data_dir.to_owned();
    }
    if let Some(public_dir) = matches.get_one::<PathBuf>("public-dir") {
        config.public_dir = public_dir.to_owned();
    }
    config
}

fn server_config(matches: &ArgMatches) -> Result<ServerConfig, FormdropError> {
    let config_path = matches.get_one::<PathBuf>("config");
    let config = ServerConfig::load(config_path.map(|path| path.as_path()))?;
    Ok(apply_flags(config, matches))
}

async fn start(config: ServerConfig) -> io::Result<()> {
    log::info!("Running 📮 server on {}", config.addr());
    log::info!("Entries are stored in {:?}", config.data_dir);

    let data = app_data::FormdropAppData::new(LocalEntryStore::new(&config.data_dir));
    let public_dir = config.public_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .service(routes::api())
            .service(Files::new("/", &public_dir).index_file(DEFAULT_INDEX_FILE))
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    util::logging::init_logging_with_default("info");

    let command = Command::new("formdrop-server")
        .version(FORMDROP_VERSION)
        .about(ABOUT)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(start_cmd());

    let matches = command.get_matches();
    match matches.subcommand() {
        Some(("start", sub_matches)) => match server_config(sub_matches) {
            Ok(config) => start(config).await,
            Err(err) => {
                log::error!("Invalid server configuration: {}", err);
                Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))
            }
        },
        _ => unreachable!("subcommand is required"),
    }
}
