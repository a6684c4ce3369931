// FileScout - core/registry.rs
//
// Folder registry: the fixed set of named search roots offered in the UI.
//
// The well-known user folders are resolved by the platform layer and passed
// in as `KnownFolders`, so this module stays free of OS lookups and can be
// tested with synthetic paths.

use crate::core::model::FolderContext;
use crate::util::constants;
use std::path::PathBuf;

/// Platform-resolved locations of the conventional user folders.
///
/// `None` means the platform did not report the folder; the registry then
/// falls back to `<home>/<Name>`.
#[derive(Debug, Clone, Default)]
pub struct KnownFolders {
    pub home: PathBuf,
    pub desktop: Option<PathBuf>,
    pub documents: Option<PathBuf>,
    pub pictures: Option<PathBuf>,
    pub videos: Option<PathBuf>,
    pub music: Option<PathBuf>,
}

/// Build the default registry: Desktop, Documents, Pictures, Videos, Music
/// and the volume root, with priorities 1 through 6.
pub fn default_folders(known: &KnownFolders) -> Vec<FolderContext> {
    let user_folders: [(&str, Option<&PathBuf>); 5] = [
        ("Desktop", known.desktop.as_ref()),
        ("Documents", known.documents.as_ref()),
        ("Pictures", known.pictures.as_ref()),
        ("Videos", known.videos.as_ref()),
        ("Music", known.music.as_ref()),
    ];

    let mut folders: Vec<FolderContext> = user_folders
        .into_iter()
        .zip(1u32..)
        .map(|((name, resolved), priority)| {
            let path = resolved
                .cloned()
                .unwrap_or_else(|| known.home.join(name));
            FolderContext::new(name, path, priority)
        })
        .collect();

    let next = next_priority(&folders);
    folders.push(FolderContext::new(
        constants::SYSTEM_ROOT_NAME,
        constants::SYSTEM_ROOT_PATH,
        next,
    ));
    folders
}

/// Append user-defined entries (from `config.toml`) after the built-ins.
///
/// Extra entries receive consecutive priorities following the highest
/// existing one. An entry whose name already exists is skipped.
pub fn with_extra_folders(
    mut folders: Vec<FolderContext>,
    extras: &[(String, PathBuf)],
) -> Vec<FolderContext> {
    for (name, path) in extras {
        if folders.iter().any(|f| f.name.eq_ignore_ascii_case(name)) {
            tracing::warn!(folder = %name, "Duplicate folder name in config; entry skipped");
            continue;
        }
        let priority = next_priority(&folders);
        folders.push(FolderContext::new(name.clone(), path.clone(), priority));
    }
    folders
}

/// Paths of the selected folders, ordered by ascending priority.
///
/// `selected[i]` corresponds to `folders[i]`; missing flags count as
/// unselected.
pub fn selected_roots(folders: &[FolderContext], selected: &[bool]) -> Vec<PathBuf> {
    let mut chosen: Vec<&FolderContext> = folders
        .iter()
        .zip(selected.iter().copied().chain(std::iter::repeat(false)))
        .filter_map(|(f, on)| on.then_some(f))
        .collect();
    chosen.sort_by_key(|f| f.priority);
    chosen.into_iter().map(|f| f.path.clone()).collect()
}

fn next_priority(folders: &[FolderContext]) -> u32 {
    folders.iter().map(|f| f.priority).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> KnownFolders {
        KnownFolders {
            home: PathBuf::from("/home/u"),
            desktop: Some(PathBuf::from("/home/u/Schreibtisch")),
            documents: None,
            pictures: None,
            videos: None,
            music: Some(PathBuf::from("/srv/music")),
        }
    }

    #[test]
    fn test_default_registry_order_and_priorities() {
        let folders = default_folders(&known());
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Desktop", "Documents", "Pictures", "Videos", "Music", "System Root"]
        );
        let priorities: Vec<_> = folders.iter().map(|f| f.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_resolved_paths_preferred_over_fallback() {
        let folders = default_folders(&known());
        assert_eq!(folders[0].path, PathBuf::from("/home/u/Schreibtisch"));
        assert_eq!(folders[1].path, PathBuf::from("/home/u/Documents"));
        assert_eq!(folders[4].path, PathBuf::from("/srv/music"));
        assert_eq!(folders[5].path, PathBuf::from(constants::SYSTEM_ROOT_PATH));
    }

    #[test]
    fn test_extra_folders_get_following_priorities() {
        let folders = with_extra_folders(
            default_folders(&known()),
            &[
                ("Projects".to_string(), PathBuf::from("/work")),
                ("music".to_string(), PathBuf::from("/dup")),
                ("Scratch".to_string(), PathBuf::from("/tmp")),
            ],
        );
        assert_eq!(folders.len(), 8);
        assert_eq!(folders[6].name, "Projects");
        assert_eq!(folders[6].priority, 7);
        assert_eq!(folders[7].name, "Scratch");
        assert_eq!(folders[7].priority, 8);
    }

    #[test]
    fn test_selected_roots_sorted_by_priority() {
        let folders = vec![
            FolderContext::new("B", "/b", 3),
            FolderContext::new("A", "/a", 1),
            FolderContext::new("C", "/c", 2),
        ];
        let roots = selected_roots(&folders, &[true, true, false]);
        assert_eq!(roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_selected_roots_short_flag_list() {
        let folders = vec![FolderContext::new("A", "/a", 1), FolderContext::new("B", "/b", 2)];
        assert_eq!(selected_roots(&folders, &[true]), vec![PathBuf::from("/a")]);
        assert!(selected_roots(&folders, &[]).is_empty());
    }
}
