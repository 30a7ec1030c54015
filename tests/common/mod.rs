#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn blog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogcore").unwrap();
    cmd.env_remove("BLOGCORE_ROOT");
    cmd.env_remove("BLOGCORE_LOG");
    cmd
}

/// Initialize a blog directory at `root`.
pub fn init_blog(root: &Path) {
    blog_cmd().arg("init").arg(root).assert().success();
}

/// Write `posts/<slug>.toml` with the given fields; `extra` is appended verbatim.
pub fn write_post(root: &Path, slug: &str, title: &str, date: &str, content: &str, extra: &str) {
    let body = format!(
        "id = \"{slug}\"\nslug = \"{slug}\"\ntitle = \"{title}\"\n\
        published_at = \"{date}T09:00:00Z\"\n{extra}\ncontent = '''\n{content}'''\n"
    );
    fs::write(root.join("posts").join(format!("{}.toml", slug)), body).unwrap();
}
