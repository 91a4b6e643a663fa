/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, Command, value_parser};

use dbhub_tls_cert::issuer::{CaSource, CertIssuer, FileCaSource, IssuerConfig};

const ARG_CA_CERT: &str = "ca-cert";
const ARG_CA_KEY: &str = "ca-key";
const ARG_REALM: &str = "realm";
const ARG_DAYS: &str = "days";
const ARG_ORGANIZATION: &str = "organization";
const ARG_USER: &str = "user";

const DEFAULT_DAYS: &str = "60";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Command::new("dbhub-certgen")
        .arg(
            Arg::new(ARG_CA_CERT)
                .help("Intermediate CA certificate file (PEM)")
                .long(ARG_CA_CERT)
                .num_args(1)
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_CA_KEY)
                .help("Intermediate CA private key file (PEM, PKCS#1 RSA)")
                .long(ARG_CA_KEY)
                .num_args(1)
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_REALM)
                .help("Realm used to build the certificate Common Name as user@realm")
                .long(ARG_REALM)
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new(ARG_DAYS)
                .help("Certificate validity in days")
                .long(ARG_DAYS)
                .num_args(1)
                .default_value(DEFAULT_DAYS)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_ORGANIZATION)
                .help("Subject Organization to set instead of the default")
                .long(ARG_ORGANIZATION)
                .num_args(1),
        )
        .arg(
            Arg::new(ARG_USER)
                .help("User names to issue certificate bundles for")
                .action(ArgAction::Append)
                .required(true),
        )
        .get_matches();

    let ca_cert_file = args.get_one::<PathBuf>(ARG_CA_CERT).unwrap();
    let ca_key_file = args.get_one::<PathBuf>(ARG_CA_KEY).unwrap();
    let realm = args.get_one::<String>(ARG_REALM).unwrap();
    let days = *args.get_one::<u32>(ARG_DAYS).unwrap();

    let mut config = IssuerConfig::new(realm.as_str(), days)?;
    if let Some(o) = args.get_one::<String>(ARG_ORGANIZATION) {
        config.set_organization(o.to_string());
    }

    let source = FileCaSource::new(ca_cert_file.clone(), ca_key_file.clone());
    // fail early on unusable CA material instead of once per user
    source
        .load()
        .context("failed to load intermediate CA material")?;

    let issuer = CertIssuer::new(config, source);

    let users = args.get_many::<String>(ARG_USER).unwrap();
    for user in users {
        if let Err(e) = issue_one(&issuer, user) {
            eprintln!("== {user}:\n {e:?}");
        }
    }

    Ok(())
}

fn issue_one(issuer: &CertIssuer<FileCaSource>, user: &str) -> anyhow::Result<()> {
    let bundle = issuer
        .issue_client_cert(user)
        .context("failed to issue client certificate")?;

    let output_file = format!("{user}.pem");
    let mut file = std::fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&output_file)
        .map_err(|e| anyhow!("failed to open output file {output_file}: {e:?}"))?;
    file.write_all(&bundle)
        .map_err(|e| anyhow!("failed to write bundle to file {output_file}: {e:?}"))?;
    println!("{output_file}");
    Ok(())
}
