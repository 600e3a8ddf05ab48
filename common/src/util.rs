//! A module which contains some utility functions
use std::{
    env,
    path::{Path, PathBuf},
};

use super::QsResult;

/// Finds the project root, that is the root of the git repo.
/// In particular, this will return the path to the closest ancestor to the current working directory,
/// which contains a `.git` folder.
/// If no such ancestor is found, the current working directory is returned.
pub fn find_project_root() -> QsResult<PathBuf> {
    let cwd = env::current_dir()?;

    #[allow(clippy::redundant_closure)]
    Ok(cwd
        .ancestors()
        .find(|ancestor| has_git_directory(ancestor))
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd))
}

fn has_git_directory<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    let mut path_buf = path.as_ref().to_path_buf();
    path_buf.push(".git");
    // This also checks if the path exists.
    path_buf.is_dir()
}
