use chromacipher_core::color::convert::hsv_to_rgb;
use chromacipher_core::validate::validate_table;
use chromacipher_core::CharColorTable;
use clap::Args;

#[derive(Args)]
pub struct TableArgs {}

pub fn run(_args: TableArgs) -> anyhow::Result<()> {
    let table = CharColorTable::shared();
    validate_table(table)?;

    for &(ch, hsv) in table.entries() {
        let hex = hsv_to_rgb(hsv).to_hex();
        println!("{ch:?} h={} s={} v={} hex={hex}", hsv.h, hsv.s, hsv.v);
    }

    eprintln!(
        "table ok: entries={} table_id={}",
        table.len(),
        table.table_id_hex()
    );
    Ok(())
}
