//! Plain-text renderers, one per view.

use std::io::{self, Write};

use folio_app::models::ProjectListing;
use folio_core::{BookingLink, Carousel, CatalogEntry, CategoryCount, CategoryFilter};

pub fn header(out: &mut impl Write, site_title: &str, section: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {site_title} :: {section} ==")?;
    Ok(())
}

pub fn home(
    out: &mut impl Write,
    featured: &[&CatalogEntry],
    carousel: &Carousel,
) -> io::Result<()> {
    let Some(entry) = featured.get(carousel.current()) else {
        writeln!(out, "Nothing featured yet. Try `projects`.")?;
        return Ok(());
    };

    writeln!(out, "[{}] {}", carousel.position_label(), entry.title)?;
    writeln!(out, "    {} for {}", entry.agency_name, entry.brand_name)?;
    writeln!(out, "    {}", entry.summary)?;
    if let Some(hero) = entry.hero_image() {
        writeln!(out, "    image: {hero}")?;
    }
    let state = if carousel.is_playing() { "playing" } else { "paused" };
    writeln!(out, "    ({state}; `open {}` to read more)", entry.id)?;
    Ok(())
}

pub fn filter_bar(
    out: &mut impl Write,
    counts: &[CategoryCount],
    active: &CategoryFilter,
) -> io::Result<()> {
    let items: Vec<String> = counts
        .iter()
        .map(|c| {
            let marker = if &c.filter == active { "*" } else { "" };
            format!("{marker}{} ({})", c.filter.label(), c.count)
        })
        .collect();
    writeln!(out, "{}", items.join(" | "))?;
    Ok(())
}

pub fn project_list(out: &mut impl Write, listing: &ProjectListing) -> io::Result<()> {
    let filter = &listing.filter;
    if !filter.toggles.is_empty() {
        let toggles: Vec<&str> = filter.toggles.iter().map(|t| t.label()).collect();
        writeln!(out, "toggles: {}", toggles.join(", "))?;
    }
    if !filter.query.is_empty() {
        writeln!(out, "search: \"{}\"", filter.query)?;
    }

    if listing.is_empty() {
        writeln!(out, "No projects match. `reset` clears all filters.")?;
        return Ok(());
    }

    if !listing.featured.is_empty() {
        writeln!(out, "Featured")?;
        for entry in &listing.featured {
            card(out, entry)?;
        }
    }
    if !listing.regular.is_empty() {
        writeln!(out, "All work")?;
        for entry in &listing.regular {
            card(out, entry)?;
        }
    }
    writeln!(out, "{} project(s)", listing.len())?;
    Ok(())
}

fn card(out: &mut impl Write, entry: &CatalogEntry) -> io::Result<()> {
    writeln!(
        out,
        "  {:>3}  {}  ({}, {})",
        entry.id, entry.title, entry.brand_name, entry.year
    )?;
    if !entry.tags.is_empty() {
        writeln!(out, "       #{}", entry.tags.join(" #"))?;
    }
    Ok(())
}

pub fn case_study(out: &mut impl Write, entry: &CatalogEntry) -> io::Result<()> {
    writeln!(out, "{}", entry.title)?;
    writeln!(out, "{} / {} / {}", entry.brand_name, entry.agency_name, entry.year)?;
    writeln!(out, "Role: {}", entry.role)?;
    writeln!(out, "Category: {}", entry.category)?;
    writeln!(out)?;

    match &entry.case_study {
        Some(study) => {
            writeln!(out, "{}", study.overview)?;
            list(out, "Objectives", &study.objectives)?;
            list(out, "My Role & Responsibilities", &study.responsibilities)?;
            list(out, "Deliverables", &study.deliverables)?;
            list(out, "Tools", &study.tools)?;
            list(out, "Gallery", &study.gallery)?;
        }
        None => {
            writeln!(out, "{}", entry.summary)?;
            list(out, "Images", &entry.image_refs)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "`next` for the next project, `back` for the list")?;
    Ok(())
}

fn list(out: &mut impl Write, title: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{title}")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

pub fn about(out: &mut impl Write, entry_count: usize) -> io::Result<()> {
    writeln!(
        out,
        "3D experience design for brands and agencies: stands, branded vehicles,"
    )?;
    writeln!(out, "events, retail pop-ups and game IP activations.")?;
    writeln!(out, "{entry_count} projects in the catalog.")?;
    Ok(())
}

pub fn contact(out: &mut impl Write, booking: Option<&BookingLink>) -> io::Result<()> {
    match booking {
        Some(link) => {
            writeln!(out, "Book a call: {}", link.base_url())?;
            writeln!(out, "`book <email> <name>` prefills the form")?;
        }
        None => writeln!(out, "Booking is not configured.")?,
    }
    Ok(())
}
