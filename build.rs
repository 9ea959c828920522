fn main() {
  watch_git_refs();

  let pkg_version = env!("CARGO_PKG_VERSION");
  let git_info = match git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
    // If git describe already carries the package version, use it as is
    // (minus the 'g' marker before the commit sha); otherwise prepend it.
    Some(info) if info.contains(pkg_version) => info.replace('g', ""),
    Some(info) => format!("v{}-{}", pkg_version, info),
    None => String::from(pkg_version),
  };
  println!("cargo:rustc-env=_GIT_INFO={}", git_info);
}

fn git(args: &[&str]) -> Option<String> {
  let output = std::process::Command::new("git").args(args).output().ok()?;
  let out = std::str::from_utf8(&output.stdout).ok()?.trim();
  if out.is_empty() {
    None
  } else {
    Some(out.to_string())
  }
}

// Rebuild when the head or any relevant git refs change.
fn watch_git_refs() {
  let git_dir = match git(&["rev-parse", "--git-dir"]) {
    Some(dir) => dir,
    None => return,
  };
  let git_path = std::path::Path::new(&git_dir);
  for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
    if git_path.join(watched).exists() {
      println!("cargo:rerun-if-changed={}/{}", git_dir, watched);
    }
  }
}
