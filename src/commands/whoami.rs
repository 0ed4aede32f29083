// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::GraphqlClient;
use anyhow::Result;

pub fn handle(client: &GraphqlClient) -> Result<()> {
    let user = client.user()?;
    println!("{} ({})", user.name, user.id);
    Ok(())
}
