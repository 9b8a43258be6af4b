pub(crate) mod tracks;
