//! Media type command handlers.
//!
//! Seeding is the only write path for the reference table.

use anyhow::Result;
use media_core::{MediaType, MediaTypeRepository};

/// Print every media type.
pub async fn list(repo: &dyn MediaTypeRepository) -> Result<()> {
    let media_types = repo.get_all().await?;

    if media_types.is_empty() {
        println!("No media types found.");
        println!("Use 'media-catalog media-types seed <NAME>...' to add some.");
        return Ok(());
    }

    println!("{:<6} NAME", "ID");
    for media_type in &media_types {
        println!("{:<6} {}", media_type.id, media_type.name);
    }
    Ok(())
}

/// Insert each name that is not already present.
///
/// Returns the newly inserted media types. Blank names are skipped.
pub async fn seed(repo: &dyn MediaTypeRepository, names: &[String]) -> Result<Vec<MediaType>> {
    let mut inserted = Vec::new();

    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if let Some(existing) = repo.get_by_name(name).await? {
            println!("'{}' already exists (id {})", existing.name, existing.id);
            continue;
        }

        let added = repo.add(&MediaType::new(name)).await?;
        tracing::info!(id = added.id, name = %added.name, "media type seeded");
        println!("Added '{}' (id {})", added.name, added.id);
        inserted.push(added);
    }

    repo.save_changes().await?;
    Ok(inserted)
}
