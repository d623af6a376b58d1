/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The `main` functions of the binaries.
//!
//! Results go to stdout; diagnostics go through the logger (stderr, and
//! optionally a file).

use crate::{FailResult, GlobalLogger, Scene, Settings, YamlRead};
use crate::util::ArgMatchesExt;

use clap::{App, Arg, ArgMatches};
use gfxmat_array_types::M44;
use std::ffi::OsStr;
use std::fs::File;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn logging_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("log")
            .long("log")
            .value_name("FILE")
            .takes_value(true)
            .help("Also write the log to this file."),
        Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("Log more detail about the computation."),
    ]
}

fn init_global_logger(matches: &ArgMatches<'_>) -> FailResult<()> {
    let mut logger = GlobalLogger::default();
    if let Some(path) = matches.value_of("log") {
        logger.path(path);
    }
    logger.verbosity(matches.occurrences_of("verbose") as i32);
    logger.apply()
}

fn print_matrix(label: &str, m: &M44) {
    println!("{}:", label);
    println!("{}", m);
    println!();
}

// -------------------------------------------------------------------------------------

/// Prints the model, projection and combined matrices of a scene file.
pub fn gfxmat_mvp() {
    wrap_result_main(|| {
        let matches = {
            App::new("gfxmat-mvp")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Builds model and projection matrices from a scene config.")
                .args(&[
                    Arg::with_name("config")
                        .short("c")
                        .long("config")
                        .value_name("SCENE")
                        .takes_value(true)
                        .required(true)
                        .help("Scene config (YAML)."),
                    Arg::with_name("row_major")
                        .long("row-major")
                        .help("Print the transposed (row-vector) form, regardless of the config."),
                ])
                .args(&logging_args())
                .get_matches()
        };
        init_global_logger(&matches)?;

        let path = matches.required_value_of("config")?;
        let settings = Settings::from_reader(File::open(path)?)?;
        let layout = settings.layout_with_override(matches.is_present("row_major"));
        debug!("printing matrices in {:?} layout", layout);

        let scene = Scene::from_settings(&settings, layout)?;
        print_matrix("model", &scene.model());
        print_matrix("projection", &scene.projection());
        print_matrix("projection * model", &scene.combined());
        Ok(())
    });
}

/// Prints the determinant, adjugate and inverse of a 4x4 matrix.
pub fn gfxmat_inverse() {
    wrap_result_main(|| {
        let matches = {
            App::new("gfxmat-inverse")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Inverts a 4x4 matrix by cofactor expansion.")
                .args(&[
                    Arg::with_name("input")
                        .value_name("MATRIX")
                        .required(true)
                        .help("A 4x4 matrix in YAML, as a list of rows."),
                ])
                .args(&logging_args())
                .get_matches()
        };
        init_global_logger(&matches)?;

        let path = matches.required_value_of("input")?;
        let m = M44::from(<[[f32; 4]; 4]>::from_reader(File::open(path)?)?);
        trace!("read matrix {:?}", m);

        println!("determinant: {}", m.det());
        println!();
        print_matrix("adjugate", &m.adjugate());

        let inverse = m.try_inv()?;
        print_matrix("inverse", &inverse);
        Ok(())
    });
}
