use crate::cli::TypesArgs;
use crate::error::Result;
use druginteract::core::io::tsv;
use druginteract::core::models::interaction::InteractionRecord;
use druginteract::engine::selector;
use tracing::info;

pub fn run(args: TypesArgs) -> Result<()> {
    info!("Loading interactions from {:?}", &args.interactions);
    let interactions: Vec<InteractionRecord> = tsv::read_table(&args.interactions)?;

    let types = selector::distinct_interaction_types(&interactions);
    info!(count = types.len(), "Collected distinct interaction types.");
    for interaction_type in &types {
        println!("{}", interaction_type);
    }
    Ok(())
}
