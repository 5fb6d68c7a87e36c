use super::codec;
use super::error::{AlbumError, Result};
use super::types::Album;
use crate::storage::{KvClient, MATCH_ALL};

/// Storage adapter mapping album operations onto a key-value client.
///
/// The client is injected at construction and shared by every request.
/// Single-key operations are as atomic as the backend makes them; the
/// scan-based operations (`get_all`, `delete_all`) are not isolated from
/// concurrent writers and stop at the first failure without rolling back.
pub struct AlbumStore<C> {
    client: C,
}

impl<C: KvClient> AlbumStore<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn get_one(&self, id: &str) -> Result<Album> {
        match self.client.get(id).await? {
            Some(bytes) => codec::decode(id, &bytes),
            None => Err(AlbumError::NotFound(id.to_string())),
        }
    }

    /// Returns every stored album, ordered by id.
    ///
    /// A key deleted between the scan and its fetch is skipped. Any other
    /// fetch or decode failure aborts the whole listing.
    pub async fn get_all(&self) -> Result<Vec<Album>> {
        let keys = self.client.keys(MATCH_ALL).await?;
        let mut albums = Vec::with_capacity(keys.len());

        for key in keys {
            match self.client.get(&key).await? {
                Some(bytes) => albums.push(codec::decode(&key, &bytes)?),
                None => {
                    tracing::debug!("Key {} vanished during listing", key);
                }
            }
        }

        albums.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(albums)
    }

    pub async fn put_one(&self, album: &Album) -> Result<()> {
        let bytes = codec::encode(album)?;
        self.client.set(&album.id, bytes).await?;
        Ok(())
    }

    /// Writes albums in order. Albums written before a failure stay written.
    pub async fn put_many(&self, albums: &[Album]) -> Result<()> {
        for album in albums {
            self.put_one(album).await?;
        }
        Ok(())
    }

    /// Succeeds whether or not the key existed.
    pub async fn delete_one(&self, id: &str) -> Result<()> {
        let removed = self.client.delete(id).await?;
        if !removed {
            tracing::debug!("Delete of missing album {}", id);
        }
        Ok(())
    }

    /// Deletes every key in the store and returns how many were removed.
    pub async fn delete_all(&self) -> Result<usize> {
        let keys = self.client.keys(MATCH_ALL).await?;
        let mut removed = 0;

        for key in keys {
            if self.client.delete(&key).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.client.keys(MATCH_ALL).await?.len())
    }
}
