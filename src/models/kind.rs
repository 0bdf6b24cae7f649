// Classified workload kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workload category of a container. `Generic` covers everything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Generic,
    PostgreSql,
    Minecraft,
    Portainer,
    Traefik,
    Immich,
    OwnCloud,
    Nginx,
    Redis,
    MySql,
    MongoDb,
    Grafana,
    Prometheus,
    Nextcloud,
    Minio,
    MariaDb,
    RabbitMq,
    Elasticsearch,
    Kibana,
    Jenkins,
    WordPress,
    Vaultwarden,
    Mosquitto,
    Plex,
    Jellyfin,
    HomeAssistant,
    Sonarr,
    Radarr,
}

impl ContainerKind {
    /// Stable lowercase tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Generic => "generic",
            ContainerKind::PostgreSql => "postgresql",
            ContainerKind::Minecraft => "minecraft",
            ContainerKind::Portainer => "portainer",
            ContainerKind::Traefik => "traefik",
            ContainerKind::Immich => "immich",
            ContainerKind::OwnCloud => "owncloud",
            ContainerKind::Nginx => "nginx",
            ContainerKind::Redis => "redis",
            ContainerKind::MySql => "mysql",
            ContainerKind::MongoDb => "mongodb",
            ContainerKind::Grafana => "grafana",
            ContainerKind::Prometheus => "prometheus",
            ContainerKind::Nextcloud => "nextcloud",
            ContainerKind::Minio => "minio",
            ContainerKind::MariaDb => "mariadb",
            ContainerKind::RabbitMq => "rabbitmq",
            ContainerKind::Elasticsearch => "elasticsearch",
            ContainerKind::Kibana => "kibana",
            ContainerKind::Jenkins => "jenkins",
            ContainerKind::WordPress => "wordpress",
            ContainerKind::Vaultwarden => "vaultwarden",
            ContainerKind::Mosquitto => "mosquitto",
            ContainerKind::Plex => "plex",
            ContainerKind::Jellyfin => "jellyfin",
            ContainerKind::HomeAssistant => "homeassistant",
            ContainerKind::Sonarr => "sonarr",
            ContainerKind::Radarr => "radarr",
        }
    }

    pub fn is_generic(self) -> bool {
        self == ContainerKind::Generic
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
