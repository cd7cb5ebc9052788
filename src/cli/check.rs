use anyhow::Result;
use folio_content::Portfolio;

/// Loads the content the server would serve and prints what it found.
pub fn check(config: &crate::config::Config) -> Result<()> {
    let portfolio = Portfolio::load(config.site.content_path.as_deref())?;

    println!("content    ok ({})", portfolio.hero.name);
    println!(
        "sections   {} skills categories, {} certifications, {} projects, {} timeline entries",
        portfolio.skills.len(),
        portfolio.certifications.len(),
        portfolio.projects.len(),
        portfolio.timeline.len()
    );
    println!("contact    {}", config.contact.endpoint);

    let resume = &config.site.resume_path;
    if resume.exists() {
        println!(
            "resume     {} as {}",
            resume.display(),
            portfolio.resume.filename
        );
    } else {
        tracing::warn!(path = %resume.display(), "resume not found");
        println!("resume     missing ({})", resume.display());
    }

    Ok(())
}
