use heatmap_core::{Category, PieceCatalog, catalog, parse_size};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display::{
    display_heatmap_result, display_piece_info, display_piece_list, display_search_matches,
    display_unknown_category,
};
use crate::json_output::{create_json_output, print_json_output};
use crate::search::{create_heatmap_request, describe_error, execute_heatmap, resolve_piece};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` lists every category.
    List(Option<Category>),
    /// `--list` named a category that does not exist.
    UnknownCategory(String),
    Search(String),
    Info,
    Heatmap,
}

pub fn parse_command(args: &Args) -> Result<Command, String> {
    if let Some(category) = &args.list {
        if category.eq_ignore_ascii_case("all") {
            return Ok(Command::List(None));
        }
        return Ok(match Category::parse(category) {
            Some(category) => Command::List(Some(category)),
            None => Command::UnknownCategory(category.clone()),
        });
    }

    if let Some(term) = &args.search {
        return Ok(Command::Search(term.clone()));
    }

    if args.piece.is_none() {
        return Err("piece name is required (use --list to see available pieces)".to_string());
    }

    if args.info {
        Ok(Command::Info)
    } else {
        Ok(Command::Heatmap)
    }
}

pub struct HeatmapApp {
    catalog: &'static PieceCatalog,
}

impl HeatmapApp {
    pub fn new() -> Self {
        Self { catalog: catalog() }
    }

    pub fn run(&self, args: Args, colors: &ColorScheme) -> Result<(), String> {
        match parse_command(&args)? {
            Command::List(category) => display_piece_list(self.catalog, category, colors),
            Command::UnknownCategory(name) => display_unknown_category(&name, colors),
            Command::Search(term) => {
                display_search_matches(&term, &self.catalog.search(&term), colors)
            }
            Command::Info => {
                let name = args.piece.as_deref().unwrap_or_default();
                let piece = resolve_piece(name, self.catalog)?;
                let bounds = parse_size(&args.size).map_err(describe_error)?;
                display_piece_info(piece, bounds, colors);
            }
            Command::Heatmap => {
                let json = args.json;
                let request = create_heatmap_request(args, self.catalog)?;
                let result = execute_heatmap(request)?;
                if json {
                    print_json_output(&create_json_output(&result));
                } else {
                    display_heatmap_result(&result, colors);
                }
            }
        }
        Ok(())
    }
}

impl Default for HeatmapApp {
    fn default() -> Self {
        Self::new()
    }
}
