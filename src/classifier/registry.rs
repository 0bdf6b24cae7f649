// Built-in classifier registry

use super::ClassifierEntry;
use super::rules::*;

/// Built-in entries in precedence order: the first entry matching an image wins.
///
/// Overlaps are settled only by this order (e.g. "ghcr.io/immich-app/postgres" is a
/// PostgreSQL container, not Immich).
pub fn default_registry() -> Vec<ClassifierEntry> {
    vec![
        postgres::ENTRY,
        minecraft::ENTRY,
        portainer::ENTRY,
        traefik::ENTRY,
        immich::ENTRY,
        owncloud::ENTRY,
        nginx::ENTRY,
        redis::ENTRY,
        mysql::ENTRY,
        mongodb::ENTRY,
        grafana::ENTRY,
        prometheus::ENTRY,
        nextcloud::ENTRY,
        minio::ENTRY,
        mariadb::ENTRY,
        rabbitmq::ENTRY,
        elasticsearch::ENTRY,
        kibana::ENTRY,
        jenkins::ENTRY,
        wordpress::ENTRY,
        vaultwarden::ENTRY,
        mosquitto::ENTRY,
        plex::ENTRY,
        jellyfin::ENTRY,
        homeassistant::ENTRY,
        servarr::SONARR,
        servarr::RADARR,
    ]
}
