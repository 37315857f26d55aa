/**
 * Generates the Rust types for the metadata schema in /resources and checks
 * that the metadata files compiled into the crate are present.
 */

use std::path::Path;

use thiserror::Error;

const METADATA_SCHEMA: &str = "resources/phonemetadata.proto";
const METADATA_FILES: [&str; 2] = [
    "resources/PhoneNumberMetadata.textproto",
    "resources/test_metadata.textproto",
];

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Metadata file '{path}' is missing")]
    MissingResource { path: String },

    #[error("Metadata file '{path}' is empty")]
    EmptyResource { path: String },
}

fn check_resource(path: &str) -> Result<(), BuildError> {
    if !Path::new(path).exists() {
        return Err(BuildError::MissingResource { path: path.to_string() });
    }
    if std::fs::metadata(path)?.len() == 0 {
        return Err(BuildError::EmptyResource { path: path.to_string() });
    }
    println!("cargo:rerun-if-changed={}", path);
    Ok(())
}

fn main() -> Result<(), BuildError> {
    check_resource(METADATA_SCHEMA)?;
    for path in METADATA_FILES {
        check_resource(path)?;
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(METADATA_SCHEMA)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
