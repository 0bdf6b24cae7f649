// One module per recognized workload.

pub(super) mod elasticsearch;
pub(super) mod grafana;
pub(super) mod homeassistant;
pub(super) mod immich;
pub(super) mod jellyfin;
pub(super) mod jenkins;
pub(super) mod kibana;
pub(super) mod mariadb;
pub(super) mod minecraft;
pub(super) mod minio;
pub(super) mod mongodb;
pub(super) mod mosquitto;
pub(super) mod mysql;
pub(super) mod nextcloud;
pub(super) mod nginx;
pub(super) mod owncloud;
pub(super) mod plex;
pub(super) mod portainer;
pub(super) mod postgres;
pub(super) mod prometheus;
pub(super) mod rabbitmq;
pub(super) mod redis;
pub(super) mod servarr;
pub(super) mod traefik;
pub(super) mod vaultwarden;
pub(super) mod wordpress;

mod prelude {
    pub(super) use crate::classifier::{ClassifierEntry, DetailsBuilder, Facts};
    pub(super) use crate::models::{ContainerKind, DetailFields};

    #[cfg(test)]
    pub(super) use crate::classifier::testing::{extract_with, fields};
}
