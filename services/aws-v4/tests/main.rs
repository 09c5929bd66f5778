mod credential_providers;
mod signing;
