/// Documentation page served at the root route.
pub const PAGE: &str = r#"
<h1>DAOstar Gateway API</h1>

<h2>1. Endpoint: /fetch_aragon_daos/&lt;network&gt;</h2>
<p><strong>Description:</strong> Fetches a list of DAOs from the specified Aragon network.</p>
<p><strong>Method:</strong> GET</p>
<p><strong>URL Structure:</strong> /fetch_aragon_daos/&lt;network&gt;</p>
<p><strong>Path Parameter:</strong> <code>network</code> - The network to fetch DAOs from. This is a part of the URL path.</p>
<p><strong>Available Network Options:</strong></p>
<ul>
    <li><code>arbitrum</code>: Aragon DAOs on Arbitrum Mainnet</li>
    <li><code>arbitrum-goerli</code>: Aragon DAOs on Arbitrum Goerli Testnet</li>
    <li><code>base</code>: Aragon DAOs on Base Mainnet</li>
    <li><code>base-goerli</code>: Aragon DAOs on Base Goerli Testnet</li>
    <li><code>ethereum</code>: Aragon DAOs on Ethereum Mainnet</li>
    <li><code>goerli</code>: Aragon DAOs on Goerli Testnet</li>
    <li><code>mumbai</code>: Aragon DAOs on Mumbai Testnet (Polygon)</li>
    <li><code>polygon</code>: Aragon DAOs on Polygon Mainnet</li>
    <li><code>sepolia</code>: Aragon DAOs on Sepolia Testnet</li>
</ul>

<h2>2. Endpoint: /aragon_dao/&lt;network&gt;/&lt;dao_id&gt;</h2>
<p><strong>Description:</strong> Fetches specific DAO details based on the network and DAO ID.</p>
<p><strong>Method:</strong> GET</p>
<p><strong>URL Structure:</strong> /aragon_dao/&lt;network&gt;/&lt;dao_id&gt;</p>
<p><strong>Path Parameters:</strong></p>
<ul>
    <li><code>network</code>: The network the DAO is on. Refer to the list of available networks above.</li>
    <li><code>dao_id</code>: The unique identifier of the DAO. This is a part of the URL path. Ex: 0x02bbc496bebc9a06c239670cea663c43cead899f</li>
</ul>
"#;
