use crate::domain::ShowId;
use crate::entities::{prelude::*, shows};
use crate::models::show::{NewShow, Show};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_show(model: shows::Model) -> Show {
        Show {
            id: ShowId::new(model.id),
            title: model.title,
            image: model.image,
            year: model.year,
            number_of_seasons: model.number_of_seasons,
            worth_a_watch: model.worth_a_watch,
            album_name: model.album_name,
            duration: model.duration,
            artist: model.artist,
            created: model.created,
        }
    }

    fn to_active_model(show: &NewShow) -> shows::ActiveModel {
        shows::ActiveModel {
            title: Set(show.title.clone()),
            image: Set(show.image.clone()),
            year: Set(show.year),
            number_of_seasons: Set(show.number_of_seasons),
            worth_a_watch: Set(show.worth_a_watch),
            album_name: Set(show.album_name.clone()),
            duration: Set(show.duration),
            artist: Set(show.artist.clone()),
            created: Set(show.created.clone()),
            ..Default::default()
        }
    }

    pub async fn list_all(&self) -> anyhow::Result<Vec<Show>> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_show).collect())
    }

    pub async fn get(&self, id: ShowId) -> anyhow::Result<Option<Show>> {
        let row = Shows::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model_to_show))
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Shows::find().count(&self.conn).await?)
    }

    pub async fn add(&self, show: &NewShow) -> anyhow::Result<Show> {
        let model = Self::to_active_model(show).insert(&self.conn).await?;
        info!("Added show: {} - {}", model.title, model.year);
        Ok(Self::map_model_to_show(model))
    }

    /// Inserts every show or none of them.
    pub async fn add_many(&self, new_shows: &[NewShow]) -> anyhow::Result<Vec<Show>> {
        let txn = self.conn.begin().await?;

        let mut stored = Vec::with_capacity(new_shows.len());
        for show in new_shows {
            let model = Self::to_active_model(show).insert(&txn).await?;
            stored.push(Self::map_model_to_show(model));
        }

        txn.commit().await?;

        info!("Imported {} shows", stored.len());
        Ok(stored)
    }
}
