use std::{
    env,
    net::{IpAddr, Ipv4Addr},
};

// Runtime/server settings read from the environment.

const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_HTTP_PORT: u16 = 8080;

pub fn http_host() -> IpAddr {
    parse_host(env::var("ANIMALS_SERVER_HOST").ok())
}

pub fn http_port() -> u16 {
    parse_port(env::var("ANIMALS_SERVER_PORT").ok())
}

fn parse_host(raw: Option<String>) -> IpAddr {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(DEFAULT_HTTP_HOST)
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(DEFAULT_HTTP_PORT)
}
