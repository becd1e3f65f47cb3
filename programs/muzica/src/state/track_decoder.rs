use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::error::MuzicaError;
use crate::state::Track;

/// Hand-rolled reader/writer for raw Track account data, for indexers and clients that
/// fetch accounts without the IDL.
///
/// Layout: discriminator(8) + authority(32) + track_id(u64 LE) + title(u32 LE len + bytes)
/// + cid(u32 LE len + bytes) + master_hash(32) + contributors(u32 LE count + 32 each)
/// + shares(u32 LE count + u16 LE each) + stem_mints(u32 LE count + 32 each)
/// + royalty_version(u32 LE) + bump(1)
pub struct TrackRecordDecoder;

impl TrackRecordDecoder {
    pub fn decode(data: &[u8]) -> Result<Track> {
        let mut cursor = RecordCursor { data, offset: 0 };

        let discriminator = cursor.take(8)?;
        require!(
            discriminator == Track::discriminator().as_slice(),
            MuzicaError::InvalidDataFormat
        );

        let authority = cursor.read_pubkey()?;
        let track_id = u64::from_le_bytes(cursor.read_array::<8>()?);
        let title = cursor.read_string()?;
        let cid = cursor.read_string()?;
        let master_hash = cursor.read_array::<32>()?;

        let contributor_count = cursor.read_count(32)?;
        let contributors = (0..contributor_count)
            .map(|_| cursor.read_pubkey())
            .collect::<Result<Vec<_>>>()?;

        let share_count = cursor.read_count(2)?;
        let shares = (0..share_count)
            .map(|_| cursor.read_array::<2>().map(u16::from_le_bytes))
            .collect::<Result<Vec<_>>>()?;

        let stem_count = cursor.read_count(32)?;
        let stem_mints = (0..stem_count)
            .map(|_| cursor.read_pubkey())
            .collect::<Result<Vec<_>>>()?;

        let royalty_version = u32::from_le_bytes(cursor.read_array::<4>()?);
        let bump = cursor.read_array::<1>()?[0];

        Ok(Track {
            authority,
            track_id,
            title,
            cid,
            master_hash,
            contributors,
            shares,
            stem_mints,
            royalty_version,
            bump,
        })
    }

    /// Fails with `InvalidDataFormat` if a string or list length does not fit its u32 prefix.
    pub fn encode(track: &Track) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(Track::SPACE);
        data.extend_from_slice(&Track::discriminator());
        data.extend_from_slice(track.authority.as_ref());
        data.extend_from_slice(&track.track_id.to_le_bytes());
        Self::encode_bytes(&mut data, track.title.as_bytes())?;
        Self::encode_bytes(&mut data, track.cid.as_bytes())?;
        data.extend_from_slice(&track.master_hash);

        data.extend_from_slice(&length_prefix(track.contributors.len())?);
        for contributor in &track.contributors {
            data.extend_from_slice(contributor.as_ref());
        }

        data.extend_from_slice(&length_prefix(track.shares.len())?);
        for share in &track.shares {
            data.extend_from_slice(&share.to_le_bytes());
        }

        data.extend_from_slice(&length_prefix(track.stem_mints.len())?);
        for stem_mint in &track.stem_mints {
            data.extend_from_slice(stem_mint.as_ref());
        }

        data.extend_from_slice(&track.royalty_version.to_le_bytes());
        data.push(track.bump);
        Ok(data)
    }

    fn encode_bytes(data: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
        data.extend_from_slice(&length_prefix(bytes.len())?);
        data.extend_from_slice(bytes);
        Ok(())
    }
}

/// Borsh u32 LE length prefix.
fn length_prefix(len: usize) -> Result<[u8; 4]> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| error!(MuzicaError::InvalidDataFormat))
}

struct RecordCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> RecordCursor<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(MuzicaError::InvalidDataFormat)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(MuzicaError::InvalidDataFormat)?;
        self.offset = end;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.take(N)?
            .try_into()
            .map_err(|_| error!(MuzicaError::InvalidDataFormat))
    }

    fn read_pubkey(&mut self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(self.read_array::<32>()?))
    }

    /// Element count of a vector, rejected up front if the remaining data cannot hold it.
    fn read_count(&mut self, element_size: usize) -> Result<usize> {
        let count = u32::from_le_bytes(self.read_array::<4>()?) as usize;
        let needed = count
            .checked_mul(element_size)
            .ok_or(MuzicaError::InvalidDataFormat)?;
        require!(
            needed <= self.data.len().saturating_sub(self.offset),
            MuzicaError::InvalidDataFormat
        );
        Ok(count)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_count(1)?;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| error!(MuzicaError::InvalidDataFormat))
    }
}
