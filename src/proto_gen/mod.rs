// Types generated by build/rust_build.rs from resources/phonemetadata.proto
include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));
