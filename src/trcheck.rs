use clap::*;
use itertools::Itertools;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let app = Command::new("trcheck")
        .version(crate_version!())
        .about("`trcheck` - find genes whose transcripts are not grouped contiguously")
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .after_help(
            r###"Expression estimates are only reliable when all transcripts of a gene
occupy one contiguous run of lines in the transcript info (.tr) file.
This tool reports the genes (and their transcripts) for which that
assumption is violated, so their GENE EXPRESSION and WITHIN GENE
EXPRESSION results must be discarded.

Input format:
* lines starting with `#` are comments
* other lines: <gene_id> <transcript_id> [ignored fields...]
* `stdin` and `.gz` inputs are accepted

Examples:
  trcheck data.tr
  trcheck data.tr.gz -o report.txt
"###,
        )
        .arg(
            Arg::new("infile")
                .help("Input transcript info file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output filename. [stdout] for screen")
                .default_value("stdout"),
        );

    execute(&app.get_matches())
}

fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let mut writer = trcheck::writer(args.get_one::<String>("output").unwrap())?;

    writeln!(writer, "Checking file {}", infile)?;

    let report = trcheck::scan(trcheck::reader(infile)?)?;

    if report.broken_genes.is_empty() {
        writeln!(writer, "Everything seems to be fine.")?;
    } else {
        let transcripts = report.broken_transcripts();

        writeln!(
            writer,
            "These {} (out of {}) have wrong GENE EXPRESSION results:",
            report.broken_genes.len(),
            report.genes_seen
        )?;
        writeln!(writer, "{}", report.broken_genes.iter().join(" "))?;
        writeln!(
            writer,
            "These {} transcripts have wrong WITHIN GENE EXPRESSION results:",
            transcripts.len()
        )?;
        writeln!(writer, "{}", transcripts.iter().join(" "))?;
    }

    Ok(())
}
