mod engine;
mod export;
mod models;
mod parser;
mod sample;
mod store;
mod ui;
mod validate;

use clap::Parser;
use export::export_csv_file;
use parser::parse_records_file;
use sample::sample_records;
use std::process;
use store::RecordStore;
use ui::cli::{Args, resolve_records_file};
use ui::output;
use validate::validate_collection;

fn main() {
    let args = Args::parse();

    let (records, source) = match resolve_records_file(&args) {
        Some(path) => (parse_records_file(&path), path.display().to_string()),
        None => (sample_records(), "built-in sample set".to_string()),
    };

    output::print_load_summary(records.len(), &source);
    output::print_validation_warnings(&validate_collection(&records));

    let store = RecordStore::new(records);
    let criteria = args.criteria();
    output::print_active_filters(&criteria);

    let (data, collection) = smol::block_on(async {
        store.set_search_term(&criteria.search_term).await;
        store.set_corporation(criteria.corporation.clone()).await;
        store.set_language(criteria.language.clone()).await;
        store.set_protocol(criteria.protocol.clone()).await;

        (store.dashboard().await, store.records().await)
    });

    output::print_dashboard(&data);
    output::print_available_filters(&collection);

    if let Some(ref path) = args.export_csv {
        if let Err(e) = export_csv_file(&data.subset, path) {
            eprintln!("Failed to export CSV to '{}': {}", path.display(), e);
            process::exit(1);
        }
        output::print_export_confirmation(path, data.subset.len());
    }
}
