use crate::{
    archive::ZipExtractor,
    cli::RunArgs,
    error::Result,
    fetcher::HttpFetcher,
    generator::{GenerateOptions, Generator},
    updater::ComposerUpdater,
};

/// Wires the concrete collaborators and executes the generation pipeline
/// from the current working directory.
pub fn run(args: RunArgs) -> Result<()> {
    let working_dir = std::env::current_dir()?;

    let fetcher = HttpFetcher::new()?;
    let extractor = ZipExtractor;
    let updater = ComposerUpdater::new(working_dir.clone());

    let generator = Generator::new(&fetcher, &extractor, &updater, working_dir);
    generator.generate(&GenerateOptions {
        name: args.name,
        with_docker: args.with_docker,
        docker_only: args.docker_only,
    })
}
