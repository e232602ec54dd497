use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{fs, io::AsyncWriteExt, sync::RwLock};
use tracing::{error, info};

use crate::{
    domain::{
        allergen::entities::AllergenProfileEntry,
        common::entities::app_errors::CoreError,
        journal::{entities::JournalEntry, ports::JournalRepository},
        profile::{entities::UserProfile, ports::ProfileRepository},
        resource::{
            entities::SavedResource, ports::ResourceRepository, value_objects::ResourceUpdate,
        },
        settings::{entities::AppSettings, ports::SettingsRepository},
    },
    infrastructure::data_store::app_data::AppData,
};

/// Local JSON document store backing every repository port.
///
/// The file is read on first access and cached. Writers hold the lock for the
/// whole read-modify-persist cycle and the cache only changes once the new
/// document is on disk.
#[derive(Debug, Clone)]
pub struct JsonFileDataStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    data: RwLock<Option<AppData>>,
}

impl JsonFileDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                path: path.into(),
                data: RwLock::new(None),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Loads the document now instead of on first use, seeding it when the
    /// file does not exist.
    pub async fn init(&self) -> Result<(), CoreError> {
        self.read(|_| ()).await
    }

    /// Deletes the file and drops the cache; the next access seeds defaults.
    pub async fn clear_all(&self) -> Result<(), CoreError> {
        let mut guard = self.inner.data.write().await;

        match fs::remove_file(&self.inner.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                error!("Failed to remove {}: {}", self.inner.path.display(), e);
                return Err(e.into());
            }
        }
        *guard = None;

        info!("Cleared all data in {}", self.inner.path.display());
        Ok(())
    }

    async fn read<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&AppData) -> T + Send,
        T: Send,
    {
        {
            let guard = self.inner.data.read().await;
            if let Some(data) = guard.as_ref() {
                return Ok(f(data));
            }
        }

        let mut guard = self.inner.data.write().await;
        let data = loaded(&self.inner.path, &mut guard).await?;
        Ok(f(data))
    }

    async fn write<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut AppData) -> Result<T, CoreError> + Send,
        T: Send,
    {
        let mut guard = self.inner.data.write().await;
        let data = loaded(&self.inner.path, &mut guard).await?;

        let mut updated = data.clone();
        let value = f(&mut updated)?;
        persist(&self.inner.path, &updated).await?;
        *data = updated;

        Ok(value)
    }
}

async fn loaded<'a>(
    path: &Path,
    slot: &'a mut Option<AppData>,
) -> Result<&'a mut AppData, CoreError> {
    let data = match slot.take() {
        Some(data) => data,
        None => load(path).await?,
    };
    Ok(slot.insert(data))
}

async fn load(path: &Path) -> Result<AppData, CoreError> {
    match fs::read_to_string(path).await {
        Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
            error!("Data file {} is not valid: {}", path.display(), e);
            CoreError::from(e)
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No data file at {}, seeding defaults", path.display());
            let data = AppData::default();
            persist(path, &data).await?;
            Ok(data)
        }
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            Err(e.into())
        }
    }
}

/// Writes to a sibling temp file, then renames it over `path`.
async fn persist(path: &Path, data: &AppData) -> Result<(), CoreError> {
    let bytes = serde_json::to_vec_pretty(data)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("data.json");
    let tmp = path.with_file_name(format!(".{file_name}.tmp.{}", std::process::id()));

    let mut file = fs::File::create(&tmp).await?;
    file.write_all(&bytes).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&tmp, path).await.map_err(|e| {
        error!("Failed to replace {}: {}", path.display(), e);
        CoreError::from(e)
    })
}

impl ProfileRepository for JsonFileDataStore {
    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        self.read(|data| data.user_profile.clone()).await
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        self.write(move |data| {
            data.user_profile = profile.clone();
            Ok(profile)
        })
        .await
    }

    async fn get_allergens(&self) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.read(|data| data.user_profile.allergies.clone()).await
    }

    async fn add_allergen(
        &self,
        entry: AllergenProfileEntry,
    ) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.write(move |data| {
            data.user_profile.add_allergen(entry);
            Ok(data.user_profile.allergies.clone())
        })
        .await
    }

    async fn update_allergen(
        &self,
        index: usize,
        entry: AllergenProfileEntry,
    ) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.write(move |data| {
            if !data.user_profile.update_allergen(index, entry) {
                return Err(CoreError::NotFound);
            }
            Ok(data.user_profile.allergies.clone())
        })
        .await
    }

    async fn remove_allergen(&self, index: usize) -> Result<Vec<AllergenProfileEntry>, CoreError> {
        self.write(move |data| {
            data.user_profile
                .remove_allergen(index)
                .ok_or(CoreError::NotFound)?;
            Ok(data.user_profile.allergies.clone())
        })
        .await
    }
}

impl JournalRepository for JsonFileDataStore {
    async fn get_entries(&self) -> Result<Vec<JournalEntry>, CoreError> {
        self.read(|data| data.journal_entries.clone()).await
    }

    async fn get_entry_by_date(&self, date: String) -> Result<Option<JournalEntry>, CoreError> {
        self.read(move |data| {
            data.journal_entries
                .iter()
                .find(|entry| entry.date == date)
                .cloned()
        })
        .await
    }

    async fn upsert_entry(&self, entry: JournalEntry) -> Result<JournalEntry, CoreError> {
        self.write(move |data| {
            match data
                .journal_entries
                .iter_mut()
                .find(|existing| existing.date == entry.date)
            {
                Some(existing) => *existing = entry.clone(),
                None => data.journal_entries.push(entry.clone()),
            }
            Ok(entry)
        })
        .await
    }

    async fn save_entries(&self, entries: Vec<JournalEntry>) -> Result<(), CoreError> {
        self.write(move |data| {
            data.journal_entries = entries;
            Ok(())
        })
        .await
    }
}

impl ResourceRepository for JsonFileDataStore {
    async fn get_resources(&self) -> Result<Vec<SavedResource>, CoreError> {
        self.read(|data| data.saved_resources.clone()).await
    }

    async fn save_resources(&self, resources: Vec<SavedResource>) -> Result<(), CoreError> {
        self.write(move |data| {
            data.saved_resources = resources;
            Ok(())
        })
        .await
    }

    async fn update_resource(
        &self,
        index: usize,
        update: ResourceUpdate,
    ) -> Result<SavedResource, CoreError> {
        self.write(move |data| {
            let resource = data
                .saved_resources
                .get_mut(index)
                .ok_or(CoreError::NotFound)?;
            update.apply(resource);
            Ok(resource.clone())
        })
        .await
    }
}

impl SettingsRepository for JsonFileDataStore {
    async fn get_settings(&self) -> Result<AppSettings, CoreError> {
        self.read(|data| data.settings.clone()).await
    }

    async fn save_settings(&self, settings: AppSettings) -> Result<AppSettings, CoreError> {
        self.write(move |data| {
            data.settings = settings.clone();
            Ok(settings)
        })
        .await
    }
}
