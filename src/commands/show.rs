//! Show a single post

use anyhow::Result;

use crate::Site;

/// Print one post by its tree path
pub fn run(site: &Site, path: &str) -> Result<()> {
    let Some(post) = site.store().post(path)? else {
        anyhow::bail!("Post not found: {}", path);
    };

    println!("Title:    {}", post.title);
    println!("Date:     {}", post.date.format("%Y-%m-%d"));
    println!("Category: {}", post.category);
    if !post.tags.is_empty() {
        println!("Tags:     {}", post.tags.join(", "));
    }
    println!("Words:    {}", post.word_count);
    println!();
    println!("{}", post.content);

    Ok(())
}
