use std::fmt;

use crate::error::Result;
use crate::models::{MoveResource, PokemonRecord, PokemonResource};
use crate::transport::Transport;

/// Which of the two requests a status belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pokemon,
    Move,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Pokemon => f.write_str("pokemon"),
            Stage::Move => f.write_str("move"),
        }
    }
}

/// Every way a fetch can end once both requests completed at the HTTP level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(PokemonRecord),
    /// The pokemon request came back 404.
    NotFound,
    /// Any other non-200, or any non-200 on the move request.
    UpstreamError { stage: Stage, status: u16 },
    /// The pokemon lists no moves at all.
    NoMoves,
    /// The first listed move carries no URL to follow.
    UnresolvableMove,
}

impl FetchOutcome {
    /// Collapse to the record, dropping the reason for anything else.
    pub fn into_record(self) -> Option<PokemonRecord> {
        match self {
            FetchOutcome::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Found(record) => write!(f, "found {}", record.name),
            FetchOutcome::NotFound => f.write_str("pokemon not found"),
            FetchOutcome::UpstreamError { stage, status } => {
                write!(f, "{stage} request returned HTTP {status}")
            }
            FetchOutcome::NoMoves => f.write_str("pokemon has no moves"),
            FetchOutcome::UnresolvableMove => f.write_str("first move has no url"),
        }
    }
}

/// `{base}/pokemon/{name}` with the name lower-cased.
pub fn pokemon_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/pokemon/{}",
        base_url.trim_end_matches('/'),
        name.to_lowercase()
    )
}

/// Fetch a pokemon and its first move, keeping the reason when no record
/// can be built.
///
/// Issues at most two requests, in order; the move is never requested
/// unless the pokemon request returned 200 and entry 0 of its move list
/// has a URL. Later entries are never consulted. A failing transport or an
/// undecodable 200 body is an `Err`, not an outcome.
pub async fn fetch_outcome<T>(transport: &T, base_url: &str, name: &str) -> Result<FetchOutcome>
where
    T: Transport + ?Sized,
{
    let url = pokemon_url(base_url, name);
    tracing::debug!(%url, "fetching pokemon");
    let res = transport.get(&url).await?;
    if !res.is_ok() {
        tracing::warn!(%url, status = res.status, "pokemon request failed");
        return Ok(match res.status {
            404 => FetchOutcome::NotFound,
            status => FetchOutcome::UpstreamError {
                stage: Stage::Pokemon,
                status,
            },
        });
    }
    let pokemon: PokemonResource = res.json(&url)?;

    if !pokemon.has_moves() {
        tracing::warn!(name = %pokemon.name, "pokemon lists no moves");
        return Ok(FetchOutcome::NoMoves);
    }
    // First move only, by position.
    let Some(move_url) = pokemon.first_move_url() else {
        tracing::warn!(name = %pokemon.name, "first move has no url");
        return Ok(FetchOutcome::UnresolvableMove);
    };

    tracing::debug!(url = %move_url, "fetching move");
    let move_res = transport.get(move_url).await?;
    if !move_res.is_ok() {
        tracing::warn!(url = %move_url, status = move_res.status, "move request failed");
        return Ok(FetchOutcome::UpstreamError {
            stage: Stage::Move,
            status: move_res.status,
        });
    }
    let move_data: MoveResource = move_res.json(move_url)?;

    let record = PokemonRecord {
        base_stats: pokemon.base_stats(),
        types: pokemon.type_names(),
        first_move: move_data.to_record(),
        name: pokemon.name,
    };
    tracing::debug!(name = %record.name, first_move = %record.first_move.name, "assembled record");
    Ok(FetchOutcome::Found(record))
}

/// Fetch a pokemon's stats, types and first move.
///
/// `Ok(None)` covers every "no record" case alike: unknown pokemon, a
/// non-200 from either request, an empty move list, or a first move
/// without a URL. Use [`fetch_outcome`] to tell them apart.
pub async fn fetch_full_data<T>(
    transport: &T,
    base_url: &str,
    name: &str,
) -> Result<Option<PokemonRecord>>
where
    T: Transport + ?Sized,
{
    Ok(fetch_outcome(transport, base_url, name).await?.into_record())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_lowercases_the_name() {
        assert_eq!(
            pokemon_url("https://pokeapi.co/api/v2", "PIKACHU"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            pokemon_url("https://pokeapi.co/api/v2/", "Mr-Mime"),
            "https://pokeapi.co/api/v2/pokemon/mr-mime"
        );
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(FetchOutcome::NotFound.to_string(), "pokemon not found");
        assert_eq!(
            FetchOutcome::UpstreamError {
                stage: Stage::Move,
                status: 503
            }
            .to_string(),
            "move request returned HTTP 503"
        );
        assert!(FetchOutcome::NoMoves.into_record().is_none());
        assert_eq!(
            FetchOutcome::UnresolvableMove.to_string(),
            "first move has no url"
        );
    }
}
