use crate::application::dto::{ScanRequest, ScanResponse};
use crate::port_scan::domain::{ComposeDocument, ComposeParseError, Port, PortRecord};
use crate::port_scan::services::{
    DuplicateAnalyzer, DuplicatePort, FreePortFinder, PortExtractor, SkippedPort,
};
use crate::ports::outbound::{ComposeFileLocator, ComposeFileReader, ConsoleReporter};
use crate::shared::error::PortFinderError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Port records collected from all files, plus the files that contributed nothing
type CollectedPorts = (Vec<PortRecord>, Vec<PathBuf>);

/// FindFreePortUseCase - the whole scan, from discovery to recommendation
///
/// # Type Parameters
/// * `L` - ComposeFileLocator implementation
/// * `R` - ComposeFileReader implementation
/// * `C` - ConsoleReporter implementation
pub struct FindFreePortUseCase<L, R, C> {
    locator: L,
    reader: R,
    reporter: C,
}

impl<L, R, C> FindFreePortUseCase<L, R, C>
where
    L: ComposeFileLocator,
    R: ComposeFileReader,
    C: ConsoleReporter,
{
    /// Creates a new FindFreePortUseCase with injected dependencies
    pub fn new(locator: L, reader: R, reporter: C) -> Self {
        Self {
            locator,
            reader,
            reporter,
        }
    }

    /// Executes the scan
    ///
    /// Warnings (parse errors, malformed ports, duplicates) are reported as
    /// they are found. The final success or error message is left to the
    /// caller.
    ///
    /// # Errors
    /// - `NoFilesFound` when discovery yields nothing
    /// - `EmptyPortSet` when no port was extracted from any file
    /// - `PortRangeExhausted` when the ports run contiguously up to 65535
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Discover compose files
        let files = self.discover(&request)?;

        // Step 2: Parse each file and collect its ports
        let (records, failed_files) = self.collect_ports(&files, &request);

        // Step 3: Report ports used more than once
        let duplicates = DuplicateAnalyzer::analyze(&records);
        self.report_duplicates(&duplicates);

        // Step 4: Compute the recommendation
        let ports: Vec<Port> = records.iter().map(PortRecord::port).collect();
        let free_port = FreePortFinder::find(&ports, files.len())?;

        Ok(ScanResponse {
            files,
            failed_files,
            records,
            duplicates,
            free_port,
        })
    }

    fn discover(&self, request: &ScanRequest) -> Result<Vec<PathBuf>> {
        let files = self.locator.locate(
            &request.directory,
            &request.depth,
            &request.directory_filter,
        )?;

        if files.is_empty() {
            return Err(PortFinderError::NoFilesFound {
                dir: request.directory.clone(),
            }
            .into());
        }

        Ok(files)
    }

    /// Parses every file in order; a file that cannot be read or parsed
    /// contributes no ports and the scan goes on.
    fn collect_ports(&self, files: &[PathBuf], request: &ScanRequest) -> CollectedPorts {
        let mut records = Vec::new();
        let mut failed_files = Vec::new();

        for (index, file) in files.iter().enumerate() {
            self.reporter
                .report_progress(index, files.len(), Some(&file.display().to_string()));

            let Some(document) = self.load_document(file) else {
                failed_files.push(file.clone());
                continue;
            };

            let extraction = PortExtractor::extract(&document, &request.services, file);
            for skipped in &extraction.skipped {
                self.reporter.warning(&skipped_port_warning(skipped, file));
            }
            records.extend(extraction.records);
        }

        self.reporter.report_progress(files.len(), files.len(), None);

        (records, failed_files)
    }

    fn load_document(&self, file: &Path) -> Option<ComposeDocument> {
        let content = match self.reader.read_compose_file(file) {
            Ok(content) => content,
            Err(e) => {
                self.reporter.warning(&e.to_string());
                return None;
            }
        };

        match ComposeDocument::parse(&content) {
            Ok(document) => Some(document),
            Err(e) => {
                self.reporter.warning(&parse_warning(&e, file));
                None
            }
        }
    }

    fn report_duplicates(&self, duplicates: &[DuplicatePort]) {
        for duplicate in duplicates {
            self.reporter.warning(&format!(
                "port {} is used {} times!",
                duplicate.port,
                duplicate.count()
            ));
            let files: Vec<String> = duplicate
                .files
                .iter()
                .map(|file| file.display().to_string())
                .collect();
            self.reporter.listing(&files);
        }
    }
}

/// Warning text for a port entry left out of the port set
fn skipped_port_warning(skipped: &SkippedPort, file: &Path) -> String {
    format!(
        "Skipping port of service [{}]: {}\nFile [{}]",
        skipped.service,
        skipped.error,
        file.display()
    )
}

/// Warning text for a compose file that failed to parse
fn parse_warning(error: &ComposeParseError, file: &Path) -> String {
    let line = error
        .line
        .map(|line| line.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!(
        "YAML Parse error: {}\nFile [{}] on line [{}]",
        error.message,
        file.display(),
        line
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port_scan::domain::ServiceSet;

    #[test]
    fn test_parse_warning_with_line() {
        let error = ComposeParseError {
            message: "did not find expected key".to_string(),
            line: Some(4),
        };
        let warning = parse_warning(&error, Path::new("/p/docker-compose.yml"));
        assert_eq!(
            warning,
            "YAML Parse error: did not find expected key\nFile [/p/docker-compose.yml] on line [4]"
        );
    }

    #[test]
    fn test_parse_warning_without_line() {
        let error = ComposeParseError {
            message: "bad merge".to_string(),
            line: None,
        };
        let warning = parse_warning(&error, Path::new("a.yml"));
        assert!(warning.ends_with("on line [?]"));
    }

    #[test]
    fn test_skipped_port_warning_names_service_before_reason() {
        let document =
            ComposeDocument::parse("services:\n  db:\n    ports: [\"abc:3306\"]\n").unwrap();
        let file = Path::new("/p/docker-compose.yml");
        let extraction = PortExtractor::extract(&document, &ServiceSet::default(), file);

        let warning = skipped_port_warning(&extraction.skipped[0], file);
        assert_eq!(
            warning,
            "Skipping port of service [db]: malformed port value [abc:3306]: \
             host port [abc] is not a number or a range\n\
             File [/p/docker-compose.yml]"
        );
    }
}
