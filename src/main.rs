use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use course_catalog::core::sample_data;
use course_catalog::utils::input::input;
use course_catalog::{Catalog, CatalogError, CatalogView, CategoryFilter, Course, FilterCriteria, SortOrder};

/// Browse the course catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "course-catalog", version, long_about = None)]
struct Args {
    /// JSON course list to browse instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Case-insensitive text matched against titles and descriptions
    #[arg(short, long, default_value = "")]
    search: String,

    /// "all" or a category label such as "Data Science"
    #[arg(short, long, default_value = "all", value_parser = parse_category)]
    category: CategoryFilter,

    /// popular, priceAsc, priceDesc, nameAsc or nameDesc
    #[arg(long, default_value = "popular", value_parser = parse_sort)]
    sort: SortOrder,

    /// Show a single course by id
    #[arg(long)]
    id: Option<String>,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Prompt for criteria until "q"
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_category(s: &str) -> Result<CategoryFilter, CatalogError> {
    s.parse()
}

fn parse_sort(s: &str) -> Result<SortOrder, CatalogError> {
    s.parse()
}

fn sort_choices() -> String {
    SortOrder::ALL
        .iter()
        .map(|order| format!("{} ({})", order.key(), order.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => sample_data::catalog().context("loading bundled catalog")?,
    };
    info!("catalog ready with {} courses", catalog.len());

    if let Some(id) = &args.id {
        match catalog.find(id) {
            Some(course) if args.json => println!("{}", serde_json::to_string_pretty(course)?),
            Some(course) => println!("{}", render_detail(course)),
            None => println!("Course not found: {id}"),
        }
        return Ok(());
    }

    let criteria = FilterCriteria::default()
        .with_search(&args.search)
        .with_category(args.category)
        .with_sort(args.sort);

    if args.interactive {
        return run_interactive(&catalog, criteria);
    }

    print_view(&catalog.derive_view(&criteria), args.json)
}

fn run_interactive(catalog: &Catalog, mut criteria: FilterCriteria) -> Result<()> {
    println!("Blank keeps the current value, \"reset\" clears filters, \"q\" quits.");
    loop {
        print_view(&catalog.derive_view(&criteria), false)?;

        let Some(search) = input(&format!("Search [{}]: ", criteria.search_query))? else {
            return Ok(());
        };
        match search.as_str() {
            "q" => return Ok(()),
            "reset" => {
                criteria = criteria.reset_filters();
                continue;
            }
            "" => {}
            text => criteria = criteria.with_search(text),
        }

        let Some(category) = input(&format!("Category [{}]: ", criteria.category_filter))? else {
            return Ok(());
        };
        match category.as_str() {
            "q" => return Ok(()),
            "reset" => {
                criteria = criteria.reset_filters();
                continue;
            }
            "" => {}
            label => match label.parse::<CategoryFilter>() {
                Ok(filter) => criteria = criteria.with_category(filter),
                Err(err) => eprintln!("{err}"),
            },
        }

        println!("Sort orders: {}", sort_choices());
        let Some(sort) = input(&format!("Sort [{}]: ", criteria.sort_order.label()))? else {
            return Ok(());
        };
        match sort.as_str() {
            "q" => return Ok(()),
            "reset" => criteria = criteria.reset_filters(),
            "" => {}
            key => match key.parse::<SortOrder>() {
                Ok(order) => criteria = criteria.with_sort(order),
                Err(err) => eprintln!("{err}"),
            },
        }
        debug!("criteria now {:?}", criteria);
    }
}

fn print_view(view: &CatalogView<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    println!("{}", view.summary());
    if view.is_empty() {
        println!("No courses found. Try adjusting your search or filter criteria.");
        return Ok(());
    }
    for course in &view.courses {
        println!(
            "  [{}] {} ({}) {} | {} | {} students",
            course.id, course.title, course.category, course.price, course.level, course.students
        );
    }
    Ok(())
}

fn render_detail(course: &Course) -> String {
    format!(
        "{}\n{}\n\nCategory: {}\nLevel: {}\nDuration: {}\nStudents: {}\nPrice: {}",
        course.title,
        course.description,
        course.category,
        course.level,
        course.duration,
        course.students,
        course.price
    )
}
