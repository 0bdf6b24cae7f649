// Environment and port-binding parsing for inspect results

use std::collections::HashMap;

use crate::gateway::HostBinding;

pub type EnvMap = HashMap<String, String>;

/// Parses `KEY=VALUE` strings. The first '=' separates key from value, entries without
/// '=' or with an empty key are dropped, and a repeated key keeps its last value.
pub fn parse_env<S: AsRef<str>>(env: &[S]) -> EnvMap {
    env.iter()
        .filter_map(|e| e.as_ref().split_once('='))
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Host port number; `None` for empty, zero or non-numeric values.
pub fn parse_port(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|p| *p > 0)
}

/// First binding that actually carries a host port.
pub fn first_host_port(bindings: &[HostBinding]) -> Option<u16> {
    bindings
        .iter()
        .find_map(|b| b.host_port.as_deref().and_then(parse_port))
}
